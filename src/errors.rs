use thiserror::Error;

/// The result type for the `tgref` crate.
pub type Result<T> = std::result::Result<T, TgRefError>;

/// The error type for the `tgref` crate.
///
/// Scanning itself never fails. Errors only come from building a scanner with an invalid
/// configuration.
#[derive(Error, Debug)]
pub struct TgRefError {
    /// The source of the error.
    pub source: Box<TgRefErrorKind>,
}

impl TgRefError {
    /// Create a new `TgRefError`.
    pub fn new(kind: TgRefErrorKind) -> Self {
        TgRefError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &TgRefErrorKind {
        &self.source
    }
}

impl std::fmt::Display for TgRefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum TgRefErrorKind {
    /// A handle needs at least one character.
    #[error("Invalid minimum handle length: {0}")]
    InvalidMinHandleLength(usize),

    /// All format families are switched off, the scanner could never match.
    #[error("No reference format is enabled")]
    NoFormatsEnabled,

    /// The configuration could not be deserialized.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for TgRefError {
    fn from(error: serde_json::Error) -> Self {
        TgRefError::new(TgRefErrorKind::Config(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TgRefError::new(TgRefErrorKind::InvalidMinHandleLength(0));
        assert_eq!(err.to_string(), "Invalid minimum handle length: 0");
        assert!(matches!(
            err.kind(),
            TgRefErrorKind::InvalidMinHandleLength(0)
        ));
    }
}
