//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserDirectory, UserService};

/// Application state: the user service plus the database handle used for
/// health checks.
#[derive(Clone)]
pub struct AppState {
    /// User directory service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed store and user directory over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserDirectory::new(store));

        Self::new(user_service, database)
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
