//! User domain entity, its transport DTOs and the conversions between them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
///
/// `email` and `dni` are meant to be unique but the store does not enforce it;
/// only creation checks for an existing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub dni: String,
}

impl User {
    /// Merge a patch into the entity, overwriting only the fields it carries.
    pub fn apply(&mut self, patch: UpdateUser) {
        let UpdateUser {
            name,
            surname,
            email,
            password,
            dni,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(surname) = surname {
            self.surname = surname;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(password) = password {
            self.password = password;
        }
        if let Some(dni) = dni {
            self.dni = dni;
        }
    }
}

/// User that has not been persisted yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub dni: String,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// First name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Beatriz")]
    pub name: String,
    /// Last name
    #[validate(length(min = 1, message = "surname is required"))]
    #[schema(example = "Gomez")]
    pub surname: String,
    /// Email address
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "bea@example.com")]
    pub email: String,
    /// Account password
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "s3cret")]
    pub password: String,
    /// National identity document number
    #[validate(length(min = 1, message = "dni is required"))]
    #[schema(example = "30123456")]
    pub dni: String,
}

/// User patch data transfer object.
///
/// `None` means "leave unchanged"; an absent key and an explicit `null`
/// both decode to `None`. Any supplied value, the empty string included,
/// overwrites the stored field.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New first name
    #[schema(example = "Bea")]
    pub name: Option<String>,
    /// New last name
    pub surname: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New password
    pub password: Option<String>,
    /// New national identity document number
    pub dni: Option<String>,
}

impl UpdateUser {
    /// True when the patch carries no updatable field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.dni.is_none()
    }
}

/// User as returned to callers.
///
/// Mirrors every entity field; the password never leaves the process in
/// serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserDto {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// First name
    #[schema(example = "Beatriz")]
    pub name: String,
    /// Last name
    #[schema(example = "Gomez")]
    pub surname: String,
    /// Email address
    #[schema(example = "bea@example.com")]
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// National identity document number
    #[schema(example = "30123456")]
    pub dni: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            email: user.email,
            password: user.password,
            dni: user.dni,
        }
    }
}

impl From<CreateUser> for NewUser {
    fn from(dto: CreateUser) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            email: dto.email,
            password: dto.password,
            dni: dto.dni,
        }
    }
}
