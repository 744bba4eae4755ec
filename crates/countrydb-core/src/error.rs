// crates/countrydb-core/src/error.rs

//! Error types for loading and configuring the country database.
//!
//! Filtering itself never fails; every error in this crate comes from getting
//! a dataset into memory or from reading configuration.

use thiserror::Error;

/// Errors raised while loading a dataset or parsing configuration.
#[derive(Debug, Error)]
pub enum CountryDbError {
    /// The dataset file does not exist or cannot be opened.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// Reading the dataset failed after it was opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON or does not match the record layout.
    #[cfg(feature = "json")]
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset parsed but its content is unusable (e.g. a record without a name).
    #[error("invalid dataset: {0}")]
    InvalidData(String),

    /// A configuration value could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Crate-wide result alias.
pub type Result<T, E = CountryDbError> = std::result::Result<T, E>;

impl CountryDbError {
    /// True for failures caused by the dataset content rather than its location.
    pub fn is_malformed(&self) -> bool {
        match self {
            #[cfg(feature = "json")]
            CountryDbError::Json(_) => true,
            CountryDbError::InvalidData(_) => true,
            _ => false,
        }
    }
}
