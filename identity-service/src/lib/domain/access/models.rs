use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::access::errors::PasswordPolicyError;
use crate::user::models::EmailAddress;
use crate::user::models::Role;
use crate::user::models::User;
use crate::user::models::UserId;

/// Identity facts about the caller.
///
/// Embedded in issued tokens, and rebuilt from the user record on every
/// verified request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaims {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl From<&User> for UserClaims {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            role: user.role,
            name: user.name.clone(),
        }
    }
}

/// The part of a token payload trusted during verification.
///
/// Every other identity field is looked up again from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSubject {
    pub user_id: UserId,
}

/// Plaintext password candidate.
///
/// Never printed; `Debug` shows a placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 6;

    /// # Errors
    /// * `TooShort` - Fewer than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}
