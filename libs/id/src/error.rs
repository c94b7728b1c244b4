//! Error types for alphabet validation and ID generation.

use thiserror::Error;

/// Errors that can occur when configuring a generator or generating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The alphabet has too many symbols for single-byte digits.
    #[error("alphabet must be shorter than 255 symbols, got {len}")]
    AlphabetTooLong { len: usize },

    /// The alphabet has too few symbols to form a positional number system.
    #[error("alphabet must contain at least 2 symbols, got {len}")]
    AlphabetTooShort { len: usize },

    /// Two alphabet symbols claim the same lookup slot.
    #[error("{symbol:?} is ambiguous")]
    AmbiguousSymbol { symbol: char },

    /// The symbol cannot be addressed by a byte-indexed lookup table.
    #[error("{symbol:?} is outside the single-byte range")]
    UnsupportedSymbol { symbol: char },

    /// The prefix table has no entries.
    #[error("prefix table cannot be empty")]
    EmptyPrefixTable,

    /// A prefix is unusable.
    #[error("invalid prefix {prefix:?} for kind {kind}: {reason}")]
    InvalidPrefix {
        kind: String,
        prefix: String,
        reason: &'static str,
    },

    /// Two kinds share the same prefix.
    #[error("prefix {prefix:?} is used by both {first} and {second}")]
    DuplicatePrefix {
        prefix: String,
        first: String,
        second: String,
    },

    /// A closed kind has no prefix in the table.
    #[error("no prefix configured for kind {kind}")]
    MissingPrefix { kind: String },

    /// The generator was built without an entropy source.
    #[error("no entropy source configured")]
    MissingEntropySource,

    /// A zero-byte ID was requested.
    #[error("ID size must be at least 1 byte")]
    ZeroSize,

    /// The entropy source could not supply bytes.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// The kind is not present in the prefix table.
    #[error("unknown identifier kind: {0}")]
    UnknownKind(String),
}

impl IdError {
    /// Returns true if this error is raised while building a generator.
    ///
    /// These are fatal to construction: fix the configuration and rebuild.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            IdError::AlphabetTooLong { .. }
                | IdError::AlphabetTooShort { .. }
                | IdError::AmbiguousSymbol { .. }
                | IdError::UnsupportedSymbol { .. }
                | IdError::EmptyPrefixTable
                | IdError::InvalidPrefix { .. }
                | IdError::DuplicatePrefix { .. }
                | IdError::MissingPrefix { .. }
                | IdError::MissingEntropySource
                | IdError::ZeroSize
        )
    }

    /// Returns true if the entropy source failed to supply bytes.
    pub fn is_entropy(&self) -> bool {
        matches!(self, IdError::EntropyUnavailable(_))
    }
}

/// Failure reported by an entropy source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EntropyError {
    message: String,
}

impl EntropyError {
    /// Creates an entropy error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<EntropyError> for IdError {
    fn from(err: EntropyError) -> Self {
        IdError::EntropyUnavailable(err.message)
    }
}
