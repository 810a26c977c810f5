use chrono::DateTime;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenPolicy;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Moment the token's `exp` claim points at
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with the default Argon2id cost.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `policy` - Issuer, audience and time rules for tokens
    pub fn new(jwt_secret: &[u8], policy: TokenPolicy) -> Self {
        Self::with_hasher(jwt_secret, policy, PasswordHasher::new())
    }

    /// Create an authenticator around an already configured password hasher.
    pub fn with_hasher(jwt_secret: &[u8], policy: TokenPolicy, hasher: PasswordHasher) -> Self {
        Self {
            password_hasher: hasher,
            jwt_handler: JwtHandler::new(jwt_secret, policy),
        }
    }

    pub fn policy(&self) -> &TokenPolicy {
        self.jwt_handler.policy()
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Compare a candidate password with a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `payload` - Service claims to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be used
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        payload: T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.generate_token(payload)?)
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token<T: Serialize>(&self, payload: T) -> Result<AuthenticationResult, JwtError> {
        let issued_at = Utc::now();
        let access_token = self.jwt_handler.issue_at(payload, issued_at.timestamp())?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: issued_at + self.policy().lifetime,
        })
    }

    /// Validate a token against the policy and decode its claims.
    ///
    /// # Errors
    /// * `JwtError` - Any signature, time, issuer or audience check failed
    pub fn validate_token<T: DeserializeOwned>(&self, token: &str) -> Result<Claims<T>, JwtError> {
        self.jwt_handler.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Subject {
        sub: String,
    }

    fn authenticator() -> Authenticator {
        Authenticator::with_hasher(
            b"test_secret_key_at_least_32_bytes!",
            TokenPolicy::new("test-issuer", "test-audience"),
            PasswordHasher::with_cost(64, 1, 1).expect("Failed to build hasher"),
        )
    }

    fn subject() -> Subject {
        Subject {
            sub: "user123".to_string(),
        }
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, subject())
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded: Claims<Subject> = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.payload, subject());
        assert_eq!(decoded.exp, result.expires_at.timestamp());
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, subject());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_password() {
        let authenticator = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("my_password", &hash).unwrap());
        assert!(!authenticator.verify_password("other_password", &hash).unwrap());
    }

    #[test]
    fn test_authenticate_with_corrupt_hash() {
        let result = authenticator().authenticate("my_password", "not-a-phc-string", subject());
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_generate_token_expiry_follows_policy() {
        let authenticator = authenticator();

        let result = authenticator
            .generate_token(subject())
            .expect("Failed to generate token");

        let remaining = result.expires_at - Utc::now();
        assert!(remaining <= chrono::Duration::hours(4));
        assert!(remaining > chrono::Duration::hours(4) - chrono::Duration::minutes(1));
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token::<Subject>("invalid.token.here");
        assert!(result.is_err());
    }
}
