//! Crate-level error type

use crate::core::GuessError;
use crate::corpus::CorpusError;
use crate::selector::SelectError;
use crate::settings::StoreError;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure raised by the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
