use thiserror::Error;

/// Error type for JWT operations.
///
/// Variants are precise for logging; callers facing end users should
/// collapse them into one generic rejection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is not valid yet")]
    TokenNotYetValid,

    #[error("Token exceeds maximum age")]
    TokenTooOld,

    #[error("Token has unexpected issuer: {0}")]
    InvalidIssuer(String),

    #[error("Token has unexpected audience: {0}")]
    InvalidAudience(String),
}
