//! Domain layer - the User entity and its boundary representations.
//!
//! No infrastructure dependencies: persistence models live in `infra`,
//! HTTP concerns in `api`.

pub mod user;

pub use user::{CreateUser, NewUser, UpdateUser, User, UserDto};
