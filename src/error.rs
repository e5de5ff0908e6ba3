// src/error.rs
// Error types for message analysis

use thiserror::Error;

/// Main error type for the avatar-mood library
#[derive(Error, Debug)]
pub enum MoodError {
    /// The value handed to the analyzer was not text
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("lexicon error: {0}")]
    Lexicon(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using MoodError
pub type Result<T> = std::result::Result<T, MoodError>;

impl MoodError {
    /// Whether the caller handed over something that was not text
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MoodError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = MoodError::InvalidInput("expected a string, got null".to_string());
        assert!(err.to_string().contains("invalid input"));
        assert!(err.to_string().contains("got null"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_lexicon_error() {
        let err = MoodError::Lexicon("no emotion categories".to_string());
        assert!(err.to_string().contains("lexicon error"));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: MoodError = json_err.into();
        assert!(matches!(err, MoodError::Json(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: MoodError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }
}
