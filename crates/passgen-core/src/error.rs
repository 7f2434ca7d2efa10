//! Error types for `passgen-core`.

use thiserror::Error;

/// Errors produced while building a character set or sampling passwords.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// No character class is enabled and no override character set is given.
    #[error("policy is empty: enable at least one character class or supply a character set")]
    EmptyPolicy,

    /// The sampler was handed a character set with no characters.
    #[error("character set is empty")]
    EmptyCharacterSet,

    /// The secure random source could not supply entropy.
    #[error("secure random source failed: {0}")]
    RandomSourceFailure(String),

    /// A serialized policy could not be decoded.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}
