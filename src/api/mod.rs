//! API layer - HTTP handlers and routing
//!
//! Translates HTTP requests into user-directory calls and their
//! results/errors into responses.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
