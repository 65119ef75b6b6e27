//! User repository: the store behind the user directory.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user (store-defined order)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Check whether a user with this ID exists
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Persist a new user; the store assigns the ID
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite an existing user's fields
    async fn save(&self, user: User) -> AppResult<User>;

    /// Remove user by ID
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Find user by email address (first match if duplicates slipped in)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity, Model> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<UserEntity, Model, ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = <Self as ReadRepository<UserEntity, Model>>::find_all(self).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let model = <Self as ReadRepository<UserEntity, Model>>::find_by_id(self, id).await?;
        Ok(model.map(User::from))
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        <Self as ReadRepository<UserEntity, Model>>::exists_by_id(self, id).await
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let model = <Self as WriteRepository<UserEntity, Model, ActiveModel>>::insert(
            self,
            ActiveModel::from(user),
        )
        .await?;
        Ok(User::from(model))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let model = <Self as WriteRepository<UserEntity, Model, ActiveModel>>::update(
            self,
            ActiveModel::from(user),
        )
        .await?;
        Ok(User::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let removed = <Self as DeleteRepository<UserEntity>>::delete_by_id(self, id).await?;

        if removed == 0 {
            return Err(AppError::UserNotFound);
        }

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}
