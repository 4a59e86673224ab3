//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while reading `portalmap.toml`.
///
/// Produced for keys the config schema does not know about. The run
/// continues; the warning is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (e.g. `extract.feilds`)
    pub key: String,
    /// Config file the key was found in
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if it could be located
    pub line: Option<usize>,
    /// Closest known key, if one is close enough to be a typo
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}
