use std::path::PathBuf;

use thiserror::Error;

use crate::{book::Isbn, patron::PatronId};

/// Expected, recoverable outcomes of a circulation operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CirculationError {
    /// No catalog entry carries this ISBN
    #[error("Book with ISBN {isbn} not found in the library")]
    NotFound {
        /// ISBN that was looked up
        isbn: Isbn,
    },
    /// Issue found no shelved copy, or request found no circulating copy
    #[error("Book with ISBN {isbn} is not available for this operation")]
    NotAvailable {
        /// ISBN that was looked up
        isbn: Isbn,
    },
    /// Return named something other than the most recent loan
    #[error("Book with ISBN {isbn} is not at the top of the borrowed books stack")]
    OrderViolation {
        /// ISBN the caller tried to return
        isbn: Isbn,
        /// ISBN currently on top of the history, if any
        top: Option<Isbn>,
    },
    /// The loan was closed but the patron had nothing to decrement
    #[error("Patron ID {patron} has not borrowed book with ISBN {isbn}")]
    PatronMismatch {
        /// Patron named on the return
        patron: PatronId,
        /// ISBN of the record that was popped
        isbn: Isbn,
    },
}

/// Failure to load desk configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The seed file could not be read
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// File that was opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The seed file is not valid JSON for a seed
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },
}

/// Result of a circulation operation
pub type CirculationResult<T> = Result<T, CirculationError>;
