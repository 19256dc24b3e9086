//! Alias tables: `<alias> -> <value>` substitution applied before validation.

use std::collections::BTreeMap;

/// Mapping from an accepted alias to the canonical value it stands for.
pub type Aliases = BTreeMap<String, String>;

/// Return the canonical value for `value`, or `value` itself if it has no alias.
///
/// # Examples
///
/// ```
/// use stringables::{resolve_alias, Aliases};
///
/// let aliases = Aliases::from([("tx".to_string(), "upload".to_string())]);
/// assert_eq!(resolve_alias("tx", &aliases), "upload");
/// assert_eq!(resolve_alias("rx", &aliases), "rx");
/// ```
pub fn resolve_alias<'a>(value: &'a str, aliases: &'a Aliases) -> &'a str {
    aliases.get(value).map(String::as_str).unwrap_or(value)
}
