use std::io;

use thiserror::Error;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while constructing a word pool.
///
/// Both variants are construction-time failures; generation itself never
/// fails once a pool exists.
#[derive(Debug, Error)]
pub enum Error {
    /// Every candidate word was rejected by the filter.
    #[error("no valid words found in words input")]
    EmptyPool,

    /// The word list could not be opened or read.
    #[error("failed to read words input")]
    Io(#[from] io::Error),
}
