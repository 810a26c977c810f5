use std::collections::HashSet;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::config::UserSeedConfig;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// User store held in memory, fixed at construction.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Build a store from ready-made records.
    ///
    /// # Errors
    /// * `DuplicateId` - Two records share an id
    /// * `DuplicateEmail` - Two records share an email (ignoring case)
    pub fn new(mut users: Vec<User>) -> Result<Self, UserError> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();

        for user in &users {
            if !ids.insert(user.id) {
                return Err(UserError::DuplicateId(user.id));
            }
            if !emails.insert(user.email.clone()) {
                return Err(UserError::DuplicateEmail(user.email.to_string()));
            }
        }

        users.sort_by_key(|user| user.id);
        Ok(Self { users })
    }

    /// Build a store from configuration entries, hashing each password.
    ///
    /// # Errors
    /// * `InvalidEmail` / `InvalidRole` - Entry does not parse
    /// * `PasswordHashing` - Hasher failed
    /// * `DuplicateId` / `DuplicateEmail` - See [`InMemoryUserRepository::new`]
    pub fn from_seeds(seeds: &[UserSeedConfig], hasher: &PasswordHasher) -> Result<Self, UserError> {
        let users = seeds
            .iter()
            .map(|seed| -> Result<User, UserError> {
                Ok(User {
                    id: UserId(seed.id),
                    email: EmailAddress::new(seed.email.clone())?,
                    password_hash: hasher
                        .hash(&seed.password)
                        .map_err(|e| UserError::PasswordHashing(e.to_string()))?,
                    role: seed.role.parse()?,
                    name: seed.name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(users)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.clone())
    }
}
