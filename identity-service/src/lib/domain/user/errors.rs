use thiserror::Error;

use crate::user::models::UserId;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0} (expected client, developer or admin)")]
    Unknown(String),
}

/// Top-level error for all user store operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Duplicate user id: {0}")]
    DuplicateId(UserId),

    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
