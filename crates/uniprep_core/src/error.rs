//! # Pool Error Types
//!
//! Errors raised while configuring pools.
//!
//! Factory failures are deliberately absent: a pool hands whatever its
//! factory reported straight back to the caller.

use thiserror::Error;

/// Errors that can occur while setting up a pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("cannot read configuration {path}: {reason}")]
    ConfigRead {
        /// The file that was requested.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// Configuration text is not valid TOML for a pool.
    #[error("malformed configuration: {0}")]
    ConfigParse(String),
}

/// Result type for pool setup.
pub type PoolResult<T> = Result<T, PoolError>;
