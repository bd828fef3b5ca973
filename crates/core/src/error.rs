//! Typed errors for argument input.
//!
//! Parsing itself never fails: unknown shapes of flags, dangling keys, and
//! unterminated quotes all degrade into commands, modes, or partial values.
//! The only hard failures happen at the boundary, before classification
//! starts, when the input is not an ordered sequence of text.

/// Convenience alias for results carrying an [`ArgsError`].
pub type Result<T> = std::result::Result<T, ArgsError>;

/// Input-shape failures, raised before any token is classified.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// The input was not an ordered sequence at all.
    #[error("argument input must be an array of strings, found {found}")]
    NotASequence {
        /// Kind of value that was supplied instead.
        found: &'static str,
    },

    /// An element of the input sequence was not text.
    #[error("argument {index} must be a string, found {found}")]
    NonTextToken {
        /// Position of the offending element in the input.
        index: usize,
        /// Kind of value that was supplied instead.
        found: &'static str,
    },

    /// An OS-supplied argument was not valid UTF-8.
    #[error("argument {index} is not valid UTF-8: {lossy:?}")]
    NonUtf8Token {
        /// Position of the offending argument in the input.
        index: usize,
        /// Lossy rendering of the argument, for display.
        lossy: String,
    },
}

impl ArgsError {
    /// Position of the offending token, when the failure concerns one token.
    pub fn index(&self) -> Option<usize> {
        match self {
            ArgsError::NotASequence { .. } => None,
            ArgsError::NonTextToken { index, .. } | ArgsError::NonUtf8Token { index, .. } => {
                Some(*index)
            }
        }
    }
}
