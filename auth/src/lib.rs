//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - JWT issuance and verification under a [`TokenPolicy`]
//! - Authentication coordination
//!
//! Services define their own token payload and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(64, 1, 1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler, TokenPolicy};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Subject {
//!     sub: String,
//! }
//!
//! let handler = JwtHandler::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     TokenPolicy::new("my-service", "my-clients"),
//! );
//! let token = handler.issue(Subject { sub: "user123".into() }).unwrap();
//! let claims: Claims<Subject> = handler.verify(&token).unwrap();
//! assert_eq!(claims.payload.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenPolicy;
pub use password::PasswordError;
pub use password::PasswordHasher;
