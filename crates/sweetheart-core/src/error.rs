//! Error types for Sweetheart
//!
//! The interaction layer itself cannot fail; these errors only come from
//! loading and validating a [`CardConfig`](crate::config::CardConfig).

use thiserror::Error;

/// Main error type for Sweetheart operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for a card config
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but breaks a timing or capacity rule
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
