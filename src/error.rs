//! Error handling for audiolib
//!
//! Every fallible operation returns [`AudiolibError`]. Errors carry the path or
//! value that caused them and a short list of recovery suggestions.

use thiserror::Error;

/// Result type alias for audiolib operations
pub type Result<T> = std::result::Result<T, AudiolibError>;

/// Main error type for audiolib operations
#[derive(Error, Debug)]
pub enum AudiolibError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed container {path}: {reason}")]
    MalformedContainer {
        path: String,
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    #[error("Malformed table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    // Encoding Errors
    #[error("Unsupported sample encoding: {encoding}")]
    UnsupportedEncoding { encoding: String },

    #[error("Unsupported conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    // Argument Errors
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // I/O Errors
    #[error("Failed to write WAV file: {path}")]
    WavWrite {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AudiolibError {
    /// Shorthand for an [`AudiolibError::InvalidArgument`]
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        AudiolibError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            AudiolibError::FileNotFound { .. } => "FILE_NOT_FOUND",
            AudiolibError::MalformedContainer { .. } => "MALFORMED_CONTAINER",
            AudiolibError::MalformedTable { .. } => "MALFORMED_TABLE",
            AudiolibError::UnsupportedEncoding { .. } => "UNSUPPORTED_ENCODING",
            AudiolibError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            AudiolibError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AudiolibError::WavWrite { .. } => "WAV_WRITE_ERROR",
            AudiolibError::Io(_) => "IO_ERROR",
            AudiolibError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by changing the input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AudiolibError::FileNotFound { .. }
                | AudiolibError::UnsupportedEncoding { .. }
                | AudiolibError::UnsupportedConversion { .. }
                | AudiolibError::InvalidArgument { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            AudiolibError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            AudiolibError::MalformedContainer { .. } => vec![
                "Check if the file plays in another application",
                "Re-export the file as linear PCM WAV",
            ],
            AudiolibError::MalformedTable { .. } => vec![
                "Every row needs one tab-separated value per header column",
                "Values must be plain decimal numbers",
            ],
            AudiolibError::UnsupportedEncoding { .. } => vec![
                "Use integer PCM: uint8, int16, int24 or int32",
                "Convert floating-point WAV files to integer PCM first",
            ],
            AudiolibError::UnsupportedConversion { .. } => vec![
                "Convert the data to float first",
                "Write with the same encoding the data is already in",
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AudiolibError::FileNotFound {
            path: "test.wav".to_string(),
        };
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");

        let err = AudiolibError::invalid_argument("bit depth must be at least 2");
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        assert!(err.to_string().contains("bit depth"));
    }

    #[test]
    fn test_recovery_suggestions() {
        let err = AudiolibError::UnsupportedEncoding {
            encoding: "float32".to_string(),
        };
        assert!(!err.recovery_suggestions().is_empty());
        assert!(err.is_recoverable());

        let err = AudiolibError::MalformedTable {
            line: 3,
            reason: "expected 2 columns, found 1".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Malformed table at line 3: expected 2 columns, found 1");
    }
}
