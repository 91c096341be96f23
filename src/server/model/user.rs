//! User domain models and parameters.
//!
//! Users are identified externally by their Telegram ID and created lazily the first
//! time any operation references them.

use crate::model::user::UserDto;

/// Internal user record keyed by a unique Telegram ID.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// External identity asserted by the caller.
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            telegram_id: self.telegram_id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            telegram_id: entity.telegram_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            username: entity.username,
        }
    }
}

/// Identity and profile supplied by a caller, used to resolve or create their user.
///
/// Profile fields are only written when the user is created; later calls with a
/// different profile do not refresh the stored record.
#[derive(Debug, Clone)]
pub struct ResolveUserParam {
    /// Telegram ID of the caller.
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}
