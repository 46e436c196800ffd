//! Custom error types for relog with improved type safety and error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for relog operations.
///
/// Every failure is scoped to a single package pipeline; the generator
/// never lets one package's error abort its siblings.
#[derive(Error, Debug)]
pub enum RelogError {
    // Fragment errors
    #[error("malformed fragment {path}: {source}")]
    MalformedFragment {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Version/manifest errors
    #[error("invalid version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    // Workspace glob errors
    #[error("invalid workspace pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    // JSON parsing errors
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("datetime parse error: {0}")]
    ChronoParseError(#[from] chrono::ParseError),

    // I/O errors
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using RelogError
pub type Result<T> = std::result::Result<T, RelogError>;

impl RelogError {
    /// Create a malformed fragment error for a fragment file path
    pub fn malformed_fragment(
        path: impl Into<PathBuf>,
        source: serde_json::Error,
    ) -> Self {
        Self::MalformedFragment {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(msg: impl Into<String>) -> Self {
        Self::InvalidManifest(msg.into())
    }
}

impl From<glob::GlobError> for RelogError {
    fn from(err: glob::GlobError) -> Self {
        Self::Io(err.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = RelogError::InvalidVersion("1.2".to_string());
        assert_eq!(
            err.to_string(),
            "invalid version '1.2': expected MAJOR.MINOR.PATCH"
        );

        let err = RelogError::invalid_manifest("missing version field");
        assert_eq!(err.to_string(), "invalid manifest: missing version field");
    }

    #[test]
    fn test_malformed_fragment_helper() {
        let source =
            serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RelogError::malformed_fragment(".relog/a.json", source);
        assert!(matches!(err, RelogError::MalformedFragment { .. }));
        assert!(err.to_string().starts_with("malformed fragment"));
    }
}
