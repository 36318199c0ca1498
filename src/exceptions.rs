//! Error types for qrelease

use std::fmt;

/// Main error type for release configuration operations
#[derive(Debug)]
pub enum ReleaseError {
    /// Disk image descriptor is inconsistent
    InvalidDescriptor(String),

    /// Release stage name not recognized
    UnknownStage(String),

    /// Platform has no release artifacts
    UnsupportedPlatform(String),

    /// IO error
    IoError(std::io::Error),

    /// JSON serialization error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::InvalidDescriptor(msg) => write!(f, "Invalid disk image descriptor: {msg}"),
            ReleaseError::UnknownStage(stage) => write!(f, "Unknown stage name: {stage}"),
            ReleaseError::UnsupportedPlatform(os) => write!(f, "Unsupported platform: {os}"),
            ReleaseError::IoError(err) => write!(f, "IO error: {err}"),
            ReleaseError::JsonError(err) => write!(f, "JSON error: {err}"),
            ReleaseError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ReleaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReleaseError::IoError(err) => Some(err),
            ReleaseError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReleaseError {
    fn from(err: std::io::Error) -> Self {
        ReleaseError::IoError(err)
    }
}

impl From<serde_json::Error> for ReleaseError {
    fn from(err: serde_json::Error) -> Self {
        ReleaseError::JsonError(err)
    }
}

// IO failures stay IO failures so the binary reports the right exit code
impl From<anyhow::Error> for ReleaseError {
    fn from(err: anyhow::Error) -> Self {
        match err.root_cause().downcast_ref::<std::io::Error>() {
            Some(io_err) => {
                ReleaseError::IoError(std::io::Error::new(io_err.kind(), format!("{err:#}")))
            }
            None => ReleaseError::Generic(format!("{err:#}")),
        }
    }
}

/// Result type for release configuration operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ReleaseError::UnknownStage("beta".into()).to_string(),
            "Unknown stage name: beta"
        );
        assert_eq!(
            ReleaseError::UnsupportedPlatform("windows".into()).to_string(),
            "Unsupported platform: windows"
        );
    }

    #[test]
    fn test_anyhow_context_is_kept() {
        let err = anyhow::anyhow!("root cause").context("writing settings");
        let converted: ReleaseError = err.into();
        assert_eq!(converted.to_string(), "writing settings: root cause");
    }

    #[test]
    fn test_anyhow_io_error_stays_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = anyhow::Error::new(io_err).context("reading qchat.zip");
        match ReleaseError::from(err) {
            ReleaseError::IoError(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "reading qchat.zip: missing");
            }
            other => panic!("expected IoError, got {other:?}"),
        }
    }
}
