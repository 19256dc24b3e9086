//! Booleans spelled the way people type them: `on`, `yes`, `Enabled`, ...

use crate::error::{Result, StringableError};
use crate::value::{Input, Stringable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for [`BoolValue`].
///
/// Literals are matched case-insensitively. The lists are zipped pairwise
/// when building the syntax description, so keep them in matching order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolOptions {
    #[serde(rename = "true")]
    pub truthy: Vec<String>,
    #[serde(rename = "false")]
    pub falsy: Vec<String>,
}

impl Default for BoolOptions {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            truthy: words(&["enabled", "yes", "on", "true", "1"]),
            falsy: words(&["disabled", "no", "off", "false", "0"]),
        }
    }
}

/// A converted boolean together with the literal it was spelled as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
    pub truth: bool,
}

/// A boolean that remembers its spelling for display.
#[derive(Debug, Clone)]
pub struct BoolValue {
    literal: Literal,
    options: BoolOptions,
}

impl BoolValue {
    pub fn is_true(&self) -> bool {
        self.literal.truth
    }
}

fn matches_any(folded: &str, literals: &[String]) -> bool {
    literals.iter().any(|lit| lit.to_lowercase() == folded)
}

impl Stringable for BoolValue {
    type Options = BoolOptions;
    type Payload = Literal;

    const TYPENAME: &'static str = "boolean";

    fn convert(raw: Input, options: &BoolOptions) -> Result<Literal> {
        match raw {
            Input::Bool(truth) => Ok(Literal {
                text: truth.to_string(),
                truth,
            }),
            Input::Text(text) => {
                let folded = text.to_lowercase();
                let truth = if matches_any(&folded, &options.truthy) {
                    true
                } else if matches_any(&folded, &options.falsy) {
                    false
                } else {
                    return Err(StringableError::invalid(text, "Not a boolean"));
                };
                Ok(Literal { text, truth })
            }
            other => Err(StringableError::invalid(other, "Not a boolean")),
        }
    }

    fn validate(_payload: &Literal, _options: &BoolOptions) -> Result<()> {
        Ok(())
    }

    fn assemble(literal: Literal, options: BoolOptions) -> Self {
        Self { literal, options }
    }

    fn syntax_for(options: &BoolOptions) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for (t, f) in options.truthy.iter().zip(&options.falsy) {
            let pair = (t.as_str(), f.as_str());
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
        pairs
            .iter()
            .map(|(t, f)| format!("{t}/{f}"))
            .collect::<Vec<_>>()
            .join("|")
    }

    fn options(&self) -> &BoolOptions {
        &self.options
    }

    fn payload(&self) -> Literal {
        self.literal.clone()
    }

    fn to_input(&self) -> Input {
        Input::Text(self.literal.text.clone())
    }
}

impl fmt::Display for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal.text)
    }
}

impl PartialEq for BoolValue {
    fn eq(&self, other: &Self) -> bool {
        self.literal.truth == other.literal.truth
    }
}

impl PartialEq<bool> for BoolValue {
    fn eq(&self, other: &bool) -> bool {
        self.literal.truth == *other
    }
}

impl From<&BoolValue> for bool {
    fn from(value: &BoolValue) -> Self {
        value.literal.truth
    }
}
