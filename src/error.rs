//! Error handling for alpine-answers
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Parse errors always carry the 1-based line number of the offending line so
//! operators can fix the answer file without guessing.

use thiserror::Error;

/// Errors produced while parsing an answer file document.
///
/// A parse error aborts loading immediately: a partially parsed installer
/// configuration is unsafe to act on, so there is no partial-success mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-comment, non-blank line that does not match the `KEY="..."` shape
    #[error("line {line}: malformed assignment (expected KEY=\"value\")")]
    MalformedAssignment { line: usize },

    /// A quoted value was opened but its closing quote never arrived
    #[error("line {line}: unterminated quote (value never closed before end of file)")]
    UnterminatedQuote { line: usize },
}

impl ParseError {
    /// Line number (1-based) the error was reported at
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedAssignment { line } | Self::UnterminatedQuote { line } => *line,
        }
    }
}

/// Main error type for alpine-answers
#[derive(Error, Debug)]
pub enum AnswerFileError {
    /// IO errors (reading the answer file, writing templates)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Answer file grammar errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Validation errors (strict mode, bad option values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for answer file operations
pub type Result<T> = std::result::Result<T, AnswerFileError>;

// Convenient error constructors
impl AnswerFileError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::MalformedAssignment { line: 7 };
        assert_eq!(
            err.to_string(),
            "line 7: malformed assignment (expected KEY=\"value\")"
        );

        let err = ParseError::UnterminatedQuote { line: 3 };
        assert!(err.to_string().starts_with("line 3: unterminated quote"));
    }

    #[test]
    fn test_parse_error_line_accessor() {
        assert_eq!(ParseError::MalformedAssignment { line: 12 }.line(), 12);
        assert_eq!(ParseError::UnterminatedQuote { line: 4 }.line(), 4);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AnswerFileError = io_err.into();
        assert!(matches!(err, AnswerFileError::Io(_)));
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: AnswerFileError = ParseError::UnterminatedQuote { line: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Parse error: line 1: unterminated quote (value never closed before end of file)"
        );
    }

    #[test]
    fn test_validation_constructor() {
        let err = AnswerFileError::validation("unknown option");
        assert!(matches!(err, AnswerFileError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: unknown option");
    }
}
