use thiserror::Error;

use crate::user::models::Role;

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Outcome of a rejected login, token check or role check.
///
/// The messages are what callers see. They never say which check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, expired, tampered or orphaned token
    #[error("Invalid or expired token")]
    Unauthenticated,

    #[error("Access denied: {required} role required")]
    Forbidden { required: Role },

    #[error("Internal error: {0}")]
    Internal(String),
}
