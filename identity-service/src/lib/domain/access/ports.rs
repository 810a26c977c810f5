use async_trait::async_trait;

use crate::access::errors::AccessError;
use crate::access::models::LoginCommand;
use crate::access::models::LoginOutcome;
use crate::access::models::UserClaims;
use crate::user::models::User;

/// Port for authentication operations.
#[async_trait]
pub trait AccessServicePort: Send + Sync + 'static {
    /// Check credentials and mint a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Internal` - Stored hash unusable or token signing failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccessError>;

    /// Verify a bearer token and resolve the caller's current claims.
    ///
    /// # Errors
    /// * `Unauthenticated` - Any signature, time, origin or lookup check failed
    async fn verify_token(&self, token: &str) -> Result<UserClaims, AccessError>;

    /// List every user record.
    ///
    /// # Errors
    /// * `Internal` - Store failed
    async fn list_users(&self) -> Result<Vec<User>, AccessError>;
}
