//! User service - the user directory use cases.
//!
//! Orchestrates the store and the entity/DTO conversions. Uniqueness of
//! email is checked only on creation, and that check is not atomic with the
//! insert that follows it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::UPDATABLE_USER_FIELDS;
use crate::domain::{CreateUser, NewUser, UpdateUser, User, UserDto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<UserDto>>;

    /// Create a user unless one with the same email is already stored
    async fn create_user(&self, dto: CreateUser) -> AppResult<UserDto>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: i64) -> AppResult<UserDto>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Patch-update a user; only fields present in `dto` are changed
    async fn update_user(&self, id: i64, dto: UpdateUser) -> AppResult<UserDto>;

    /// Look up the user holding `email`, if any
    async fn validate_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserService over a user repository.
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserDirectory {
    async fn list_users(&self) -> AppResult<Vec<UserDto>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    async fn create_user(&self, dto: CreateUser) -> AppResult<UserDto> {
        if self.validate_user_by_email(&dto.email).await?.is_some() {
            tracing::warn!(email = %dto.email, "Rejected user creation: email already registered");
            return Err(AppError::already_exists(dto.email));
        }

        let user = self.repo.insert(NewUser::from(dto)).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(UserDto::from(user))
    }

    async fn get_user_by_id(&self, id: i64) -> AppResult<UserDto> {
        let user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        Ok(UserDto::from(user))
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::UserNotFound);
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    async fn update_user(&self, id: i64, dto: UpdateUser) -> AppResult<UserDto> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if dto.is_empty() {
            return Err(AppError::invalid_input(format!(
                "at least one of {} must be present for the update",
                UPDATABLE_USER_FIELDS.join(", ")
            )));
        }

        user.apply(dto);
        let user = self.repo.save(user).await?;
        tracing::info!(user_id = id, "User updated");

        Ok(UserDto::from(user))
    }

    async fn validate_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        tracing::debug!(email, "Looking up user by email");
        self.repo.find_by_email(email).await
    }
}
