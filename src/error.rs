// Error types for PhantomJump
//
// Absence (no comment, no identifier) is modelled as `None` throughout the crate.
// These variants cover caller mistakes and parser-level failures only.

use thiserror::Error;

/// Errors raised by the comment and symbol lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhantomJumpError {
    /// Offset lies past the end of the text it indexes into
    #[error("Offset {offset} is out of bounds for text of length {len}")]
    InvalidOffset { offset: usize, len: usize },

    /// Language is known to tree-sitter but not enabled, or not known at all
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Unsupported file extension: '{0}'")]
    UnsupportedExtension(String),

    /// Tree-sitter returned no tree (cancelled or timed out parse)
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),
}

pub type Result<T> = std::result::Result<T, PhantomJumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_offset_message() {
        let err = PhantomJumpError::InvalidOffset { offset: 12, len: 4 };
        assert_eq!(
            err.to_string(),
            "Offset 12 is out of bounds for text of length 4"
        );
    }

    #[test]
    fn test_unsupported_language_message() {
        let err = PhantomJumpError::UnsupportedLanguage("cobol".to_string());
        assert_eq!(err.to_string(), "Unsupported language: 'cobol'");
    }
}
