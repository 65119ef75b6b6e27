//! Home Banking API - user directory service.
//!
//! CRUD over the `User` entity: list, create, fetch by id, patch-update and
//! delete, persisted through SeaORM and exposed over HTTP with Axum.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: `serve` and `migrate` subcommands
//! - **config**: environment-driven settings and constants
//! - **domain**: the `User` entity and its DTOs
//! - **services**: the user directory use cases
//! - **infra**: database connection, migrations and the user repository
//! - **api**: HTTP handlers and routes
//! - **errors**: centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUser, UpdateUser, User, UserDto};
pub use errors::{AppError, AppResult};
pub use services::{UserDirectory, UserService};
