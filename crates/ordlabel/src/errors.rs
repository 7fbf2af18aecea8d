//! # Error Types

/// Errors from ordlabel operations.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// An encode/decode operation was called before `fit`.
    #[error("encoder must first be fit")]
    NotFitted,

    /// `transform` saw values which are not in the fitted vocabulary.
    #[error("attempted to encode {count} unseen label(s), first: {first:?}")]
    UnseenLabel {
        /// The number of unseen elements in the input.
        count: usize,

        /// The first unseen value, in input order.
        first: String,
    },

    /// `inverse_transform` saw a code outside ``[0, vocab_size)``.
    #[error("y contains previously unseen label {code}")]
    CodeOutOfRange {
        /// The offending code.
        code: i64,
    },

    /// Input of an unsupported kind.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Vocab size exceeds the capacity of the target code type.
    #[error("vocab size ({size}) exceeds code type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// A vocabulary key could not be cast back to the original dtype.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for ordlabel operations.
pub type LCResult<T> = core::result::Result<T, LabelError>;
