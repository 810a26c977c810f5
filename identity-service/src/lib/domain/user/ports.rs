use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Read-only access to user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address (case-insensitive).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Backing store failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Backing store failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve all users ordered by id.
    ///
    /// # Errors
    /// * `RepositoryError` - Backing store failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
