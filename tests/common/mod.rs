//! Shared fixtures: an in-memory SQLite database with migrations applied.

#![allow(dead_code)]

use std::sync::Arc;

use homebanking::config::Config;
use homebanking::domain::CreateUser;
use homebanking::infra::{Database, UserStore};
use homebanking::services::UserDirectory;

/// Fresh in-memory database; a single pooled connection keeps every query
/// on the same SQLite instance.
pub async fn test_database() -> Arc<Database> {
    let config = Config {
        database_max_connections: 1,
        ..Config::with_database_url("sqlite::memory:")
    };

    Arc::new(
        Database::connect(&config)
            .await
            .expect("Failed to open in-memory database"),
    )
}

pub fn store(db: &Database) -> Arc<UserStore> {
    Arc::new(UserStore::new(db.get_connection()))
}

pub fn directory(db: &Database) -> UserDirectory {
    UserDirectory::new(store(db))
}

pub fn new_user(email: &str, name: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        surname: "Gomez".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        dni: "30123456".to_string(),
    }
}
