//! Crate-level error types.

use std::fmt;

/// Errors produced by the cycloview crate.
///
/// Interaction handling itself never fails — misses, unparsed material
/// names, and absent pivot ancestors are all ordinary outcomes. Errors
/// only arise from the options persistence layer.
#[derive(Debug)]
pub enum CycloError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CycloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CycloError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for CycloError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
