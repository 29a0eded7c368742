//! Library error type.

use thiserror::Error;

/// Errors surfaced by index construction, persistence, and lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern does not occur in the indexed sequence.
    #[error("pattern not found in index")]
    NotFound,

    /// The sequence does not end with a unique, strictly maximal sentinel.
    #[error("sequence must end with a unique, strictly maximal sentinel")]
    SentinelViolation,

    /// A persisted table line could not be parsed.
    #[error("corrupt index data at line {line}: {reason}")]
    CorruptState {
        /// 1-based line number in the persisted file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Underlying I/O failure while saving or loading tables.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
