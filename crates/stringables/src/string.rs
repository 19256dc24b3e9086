//! Free-form text with optional length bounds.

use crate::error::{Result, StringableError};
use crate::value::{Input, Stringable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for [`StringValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOptions {
    /// Minimum length in characters.
    pub minlen: usize,
    /// Maximum length in characters; `None` is unbounded.
    pub maxlen: Option<usize>,
}

/// A string whose length lies within `[minlen, maxlen]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    value: String,
    options: StringOptions,
}

impl StringValue {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Stringable for StringValue {
    type Options = StringOptions;
    type Payload = String;

    const TYPENAME: &'static str = "string";

    fn convert(raw: Input, _options: &StringOptions) -> Result<String> {
        Ok(raw.to_string())
    }

    fn validate(payload: &String, options: &StringOptions) -> Result<()> {
        let len = payload.chars().count();
        if let Some(maxlen) = options.maxlen {
            if len > maxlen {
                return Err(StringableError::invalid(
                    payload,
                    format!("Too long (maximum length is {maxlen})"),
                ));
            }
        }
        if len < options.minlen {
            return Err(StringableError::invalid(
                payload,
                format!("Too short (minimum length is {})", options.minlen),
            ));
        }
        Ok(())
    }

    fn assemble(value: String, options: StringOptions) -> Self {
        Self { value, options }
    }

    fn syntax_for(options: &StringOptions) -> String {
        let minlen = options.minlen;
        let chars = if minlen <= 1 && matches!(options.maxlen, None | Some(1)) {
            "character"
        } else {
            "characters"
        };

        match (minlen, options.maxlen) {
            (0, None) => "string".to_string(),
            (0, Some(max)) => format!("string (at most {max} {chars})"),
            (min, None) => format!("string (at least {min} {chars})"),
            (min, Some(max)) if min == max => format!("string ({min} {chars})"),
            (min, Some(max)) => format!("string ({min}-{max} {chars})"),
        }
    }

    fn options(&self) -> &StringOptions {
        &self.options
    }

    fn payload(&self) -> String {
        self.value.clone()
    }

    fn to_input(&self) -> Input {
        Input::Text(self.value.clone())
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<str> for StringValue {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for StringValue {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
