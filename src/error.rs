//! Error types for account-record operations.

use thiserror::Error;

/// Main error type for account operations.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid password length range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("Not a number: '{0}'")]
    InputFormat(String),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AccountError>;
