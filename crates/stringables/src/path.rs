//! File system paths with `~` expansion and lexical normalization.

use crate::error::{Result, StringableError};
use crate::value::{Input, Stringable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Options for [`PathValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Reject paths that do not exist on the local file system.
    pub mustexist: bool,
}

/// A normalized path. Displays with the home directory shortened to `~`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathValue {
    path: PathBuf,
    options: PathOptions,
}

impl PathValue {
    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

/// Collapse duplicate separators and resolve `.` and `..` without touching
/// the file system.
fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return ".".to_string();
    }
    let absolute = raw.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in raw.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Replace a leading `~` with the home directory.
fn expand_home(path: String) -> String {
    let tilde = path == "~" || path.starts_with("~/");
    match dirs::home_dir() {
        Some(home) if tilde => format!("{}{}", home.display(), &path[1..]),
        _ => path,
    }
}

impl Stringable for PathValue {
    type Options = PathOptions;
    type Payload = PathBuf;

    const TYPENAME: &'static str = "path";

    fn convert(raw: Input, _options: &PathOptions) -> Result<PathBuf> {
        let text = raw.to_string();
        Ok(PathBuf::from(normalize(&expand_home(text))))
    }

    fn validate(path: &PathBuf, options: &PathOptions) -> Result<()> {
        if options.mustexist && !path.exists() {
            return Err(StringableError::invalid(
                path.display(),
                "No such file or directory",
            ));
        }
        Ok(())
    }

    fn assemble(path: PathBuf, options: PathOptions) -> Self {
        Self { path, options }
    }

    fn syntax_for(_options: &PathOptions) -> String {
        "file system path".to_string()
    }

    fn options(&self) -> &PathOptions {
        &self.options
    }

    fn payload(&self) -> PathBuf {
        self.path.clone()
    }

    fn to_input(&self) -> Input {
        Input::Text(self.path.display().to_string())
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(home) = dirs::home_dir() {
            if let Ok(rest) = self.path.strip_prefix(&home) {
                if rest.as_os_str().is_empty() {
                    return f.write_str("~");
                }
                return write!(f, "~/{}", rest.display());
            }
        }
        write!(f, "{}", self.path.display())
    }
}
