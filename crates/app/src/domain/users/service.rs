//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{
    pagination::Page,
    users::{
        data::{NewUser, UserFilter, UserPatch, UserSearch},
        errors::UsersServiceError,
        models::{User, UserId},
        repository::InMemoryUsersRepository,
    },
};

/// Users service backed by a lock-guarded in-memory repository.
#[derive(Debug)]
pub struct InMemoryUsersService {
    repository: RwLock<InMemoryUsersRepository>,
}

impl InMemoryUsersService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: RwLock::new(InMemoryUsersRepository::new()),
        }
    }

    /// A store holding the three demo users.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            repository: RwLock::new(InMemoryUsersRepository::with_seed_data()),
        }
    }
}

impl Default for InMemoryUsersService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersService for InMemoryUsersService {
    async fn list_users(&self, filter: UserFilter, page: Page) -> Vec<User> {
        self.repository.read().await.list_users(&filter, page)
    }

    async fn search_users(&self, query: String) -> Vec<User> {
        self.repository
            .read()
            .await
            .search_users(&UserSearch::new(&query))
    }

    async fn get_user(&self, user: UserId) -> Result<User, UsersServiceError> {
        self.repository
            .read()
            .await
            .get_user(user)
            .ok_or(UsersServiceError::NotFound(user))
    }

    #[tracing::instrument(name = "users.service.create_user", skip(self, user))]
    async fn create_user(&self, user: NewUser) -> User {
        let created = self.repository.write().await.create_user(user);

        info!(user_id = created.id, "created user");

        created
    }

    #[tracing::instrument(name = "users.service.replace_user", skip(self, data), err)]
    async fn replace_user(&self, user: UserId, data: NewUser) -> Result<User, UsersServiceError> {
        self.repository
            .write()
            .await
            .replace_user(user, data)
            .ok_or(UsersServiceError::NotFound(user))
    }

    #[tracing::instrument(name = "users.service.patch_user", skip(self, patch), err)]
    async fn patch_user(&self, user: UserId, patch: UserPatch) -> Result<User, UsersServiceError> {
        self.repository
            .write()
            .await
            .patch_user(user, patch)
            .ok_or(UsersServiceError::NotFound(user))
    }

    #[tracing::instrument(name = "users.service.delete_user", skip(self), err)]
    async fn delete_user(&self, user: UserId) -> Result<(), UsersServiceError> {
        if !self.repository.write().await.delete_user(user) {
            return Err(UsersServiceError::NotFound(user));
        }

        info!(user_id = user, "deleted user");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves one page of users matching the filter.
    async fn list_users(&self, filter: UserFilter, page: Page) -> Vec<User>;

    /// Users whose name or email contains `query`, ignoring case.
    async fn search_users(&self, query: String) -> Vec<User>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserId) -> Result<User, UsersServiceError>;

    /// Stores a new user under the next free id.
    async fn create_user(&self, user: NewUser) -> User;

    /// Overwrites name, email, role and active.
    async fn replace_user(&self, user: UserId, data: NewUser) -> Result<User, UsersServiceError>;

    /// Updates name, email and role when present. Never touches `active`.
    async fn patch_user(&self, user: UserId, patch: UserPatch) -> Result<User, UsersServiceError>;

    /// Deletes a user with the given id.
    async fn delete_user(&self, user: UserId) -> Result<(), UsersServiceError>;
}
