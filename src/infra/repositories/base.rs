//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! Generic SeaORM CRUD building blocks; concrete repositories implement the
//! pieces they need and expose a domain-typed API on top.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
};

use crate::errors::AppResult;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find entity by primary key
    async fn find_by_id(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) -> AppResult<Option<M>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        E::find_by_id(id)
            .one(self.db())
            .await
            .map_err(Into::into)
    }

    /// Find all entities, in whatever order the database returns them
    async fn find_all(&self) -> AppResult<Vec<M>> {
        E::find()
            .all(self.db())
            .await
            .map_err(Into::into)
    }

    /// Check whether a row with this primary key exists
    async fn exists_by_id(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) -> AppResult<bool>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        let count = E::find_by_id(id).count(self.db()).await?;
        Ok(count > 0)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + IntoActiveModel<A> + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert new entity
    async fn insert(&self, model: A) -> AppResult<M>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model
            .insert(self.db())
            .await
            .map_err(Into::into)
    }

    /// Update existing entity
    async fn update(&self, model: A) -> AppResult<M>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model
            .update(self.db())
            .await
            .map_err(Into::into)
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Delete entity by primary key, returning the number of rows removed
    async fn delete_by_id(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) -> AppResult<u64>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected)
    }
}
