//! A single string drawn from a fixed set of options.

use crate::alias::{resolve_alias, Aliases};
use crate::error::{Result, StringableError};
use crate::value::{Input, Stringable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for [`Choice`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceOptions {
    /// Every accepted value. An empty set is a configuration fault.
    pub options: Vec<String>,
    /// `<alias> -> <value>` substitutions applied before the membership check.
    pub aliases: Aliases,
}

impl ChoiceOptions {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            aliases: Aliases::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>, value: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), value.into());
        self
    }
}

/// One of a fixed set of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    value: String,
    options: ChoiceOptions,
}

impl Choice {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Stringable for Choice {
    type Options = ChoiceOptions;
    type Payload = String;

    const TYPENAME: &'static str = "option";

    fn convert(raw: Input, options: &ChoiceOptions) -> Result<String> {
        let text = raw.to_string();
        Ok(resolve_alias(&text, &options.aliases).to_string())
    }

    fn validate(value: &String, options: &ChoiceOptions) -> Result<()> {
        if options.options.iter().any(|opt| opt == value) {
            return Ok(());
        }
        match options.options.as_slice() {
            [] => Err(StringableError::Configuration(
                "No options provided".to_string(),
            )),
            [only] => Err(StringableError::invalid(value, format!("Not {only}"))),
            many => Err(StringableError::invalid(
                value,
                format!("Not one of: {}", many.join(", ")),
            )),
        }
    }

    fn assemble(value: String, options: ChoiceOptions) -> Self {
        Self { value, options }
    }

    fn syntax_for(options: &ChoiceOptions) -> String {
        options.options.join("|")
    }

    fn options(&self) -> &ChoiceOptions {
        &self.options
    }

    fn payload(&self) -> String {
        self.value.clone()
    }

    fn to_input(&self) -> Input {
        Input::Text(self.value.clone())
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<&str> for Choice {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
