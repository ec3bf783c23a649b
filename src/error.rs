//! Error types for password generation.

/// Errors produced while configuring or generating a password.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested length is zero, or smaller than the number of enabled classes.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every character class is disabled, so there is nothing to draw from.
    #[error("Character pool is empty: enable at least one character class")]
    EmptyCharacterPool,

    /// The cryptographic random source failed to produce bytes.
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
