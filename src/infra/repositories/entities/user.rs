//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set, Unchanged};

use crate::domain::{NewUser, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub dni: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            surname: model.surname,
            email: model.email,
            password: model.password,
            dni: model.dni,
        }
    }
}

/// Insert form: the id is left for the database to assign
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(user.name),
            surname: Set(user.surname),
            email: Set(user.email),
            password: Set(user.password),
            dni: Set(user.dni),
        }
    }
}

/// Update form: keyed by id, every other column overwritten
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name),
            surname: Set(user.surname),
            email: Set(user.email),
            password: Set(user.password),
            dni: Set(user.dni),
        }
    }
}
