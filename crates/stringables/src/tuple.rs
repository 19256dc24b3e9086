//! Immutable lists parsed from separated strings.
//!
//! Text input is split on the separator (surrounding whitespace ignored), list
//! input is flattened, and every item is trimmed and alias-resolved. Empty
//! items between separators are kept (`"a,,b"` has three items). Blank text
//! parses to no items at all, so an empty list renders as `""` and reparses
//! to an empty list.

use crate::alias::{resolve_alias, Aliases};
use crate::error::{Result, StringableError};
use crate::value::{Input, Stringable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Options for [`TupleValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TupleOptions {
    /// Separator used for splitting text and for display.
    pub sep: String,
    /// Allowed items; `None` accepts anything.
    pub options: Option<Vec<String>>,
    pub aliases: Aliases,
    /// Drop repeated items, keeping the first occurrence.
    pub dedup: bool,
}

impl Default for TupleOptions {
    fn default() -> Self {
        Self {
            sep: ", ".to_string(),
            options: None,
            aliases: Aliases::new(),
            dedup: false,
        }
    }
}

/// An ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleValue {
    items: Vec<String>,
    options: TupleOptions,
}

impl TupleValue {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn split_into(raw: Input, sep: &str, out: &mut Vec<String>) {
    match raw {
        Input::Text(text) => {
            if sep.is_empty() {
                out.extend(text.split_whitespace().map(str::to_string));
            } else {
                out.extend(text.split(sep).map(|item| item.trim().to_string()));
            }
        }
        Input::List(items) => {
            for item in items {
                split_into(item, sep, out);
            }
        }
        other => out.push(other.to_string()),
    }
}

impl Stringable for TupleValue {
    type Options = TupleOptions;
    type Payload = Vec<String>;

    const TYPENAME: &'static str = "list";

    fn convert(raw: Input, options: &TupleOptions) -> Result<Vec<String>> {
        let mut split = Vec::new();
        match raw {
            Input::Text(text) if text.trim().is_empty() => {}
            raw => split_into(raw, options.sep.trim(), &mut split),
        }

        let mut seen = HashSet::new();
        let items = split
            .iter()
            .map(|item| resolve_alias(item, &options.aliases).to_string())
            .filter(|item| !options.dedup || seen.insert(item.clone()))
            .collect();
        Ok(items)
    }

    fn validate(items: &Vec<String>, options: &TupleOptions) -> Result<()> {
        let Some(allowed) = &options.options else {
            return Ok(());
        };
        let invalid: Vec<&str> = items
            .iter()
            .filter(|item| !allowed.contains(item))
            .map(String::as_str)
            .collect();
        match invalid.len() {
            0 => Ok(()),
            1 => Err(StringableError::invalid(invalid[0], "Invalid option")),
            _ => Err(StringableError::invalid(
                invalid.join(&options.sep),
                "Invalid options",
            )),
        }
    }

    fn assemble(items: Vec<String>, options: TupleOptions) -> Self {
        Self { items, options }
    }

    fn syntax_for(options: &TupleOptions) -> String {
        let sep = options.sep.trim();
        format!("<OPTION>{sep}<OPTION>{sep}...")
    }

    fn options(&self) -> &TupleOptions {
        &self.options
    }

    fn payload(&self) -> Vec<String> {
        self.items.clone()
    }

    fn to_input(&self) -> Input {
        Input::List(self.items.iter().cloned().map(Input::Text).collect())
    }
}

impl fmt::Display for TupleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items.join(&self.options.sep))
    }
}

impl PartialEq<[&str]> for TupleValue {
    fn eq(&self, other: &[&str]) -> bool {
        self.items.len() == other.len() && self.items.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for TupleValue {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
