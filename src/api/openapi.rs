//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, UserDto};

/// OpenAPI documentation for the Home Banking API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Home Banking API",
        version = "0.1.0",
        description = "User directory for the home-banking application",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(UserDto, CreateUser, UpdateUser)
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
