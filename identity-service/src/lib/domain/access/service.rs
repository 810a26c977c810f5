use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::access::errors::AccessError;
use crate::access::models::LoginCommand;
use crate::access::models::LoginOutcome;
use crate::access::models::TokenSubject;
use crate::access::models::UserClaims;
use crate::access::ports::AccessServicePort;
use crate::user::models::User;
use crate::user::ports::UserRepository;

/// Domain service for login and token verification.
///
/// Stateless: all it holds is the read-only store and the signing key.
pub struct AccessService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    decoy_hash: Option<String>,
}

impl<UR> AccessService<UR>
where
    UR: UserRepository,
{
    /// Create a new access service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User store
    /// * `authenticator` - Password verification and token signing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        // Hashed with the live cost so unknown emails take as long as wrong passwords.
        let decoy_hash = authenticator
            .hash_password("decoy-password-for-unknown-accounts")
            .map_err(|e| tracing::warn!(error = %e, "Failed to prepare decoy password hash"))
            .ok();

        Self {
            repository,
            authenticator,
            decoy_hash,
        }
    }

    fn verify_decoy(&self, password: &str) {
        if let Some(decoy_hash) = &self.decoy_hash {
            let _ = self.authenticator.verify_password(password, decoy_hash);
        }
    }
}

#[async_trait]
impl<UR> AccessServicePort for AccessService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccessError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await
            .map_err(|e| AccessError::Internal(e.to_string()))?;

        let Some(user) = user else {
            self.verify_decoy(command.password.expose());
            tracing::debug!(email = %command.email, "Login for unknown email");
            return Err(AccessError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(
                command.password.expose(),
                &user.password_hash,
                UserClaims::from(&user),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Login with wrong password");
                    AccessError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    AccessError::Internal(format!("Password verification failed: {}", err))
                }
                AuthenticationError::JwtError(err) => {
                    AccessError::Internal(format!("Token generation failed: {}", err))
                }
            })?;

        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginOutcome {
            token: result.access_token,
            expires_at: result.expires_at,
            user,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<UserClaims, AccessError> {
        let claims = self
            .authenticator
            .validate_token::<TokenSubject>(token)
            .map_err(|e| {
                tracing::warn!(reason = %e, "Token rejected");
                AccessError::Unauthenticated
            })?;

        let user_id = claims.payload.user_id;
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user_id, error = %e, "User lookup failed");
                AccessError::Unauthenticated
            })?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token subject no longer exists");
                AccessError::Unauthenticated
            })?;

        Ok(UserClaims::from(&user))
    }

    async fn list_users(&self) -> Result<Vec<User>, AccessError> {
        self.repository
            .list_all()
            .await
            .map_err(|e| AccessError::Internal(e.to_string()))
    }
}
