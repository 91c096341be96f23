use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Attendance answer given by a user for a class.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Yes,
    No,
    Tentative,
}

impl RsvpStatus {
    /// Lowercase representation used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Tentative => "tentative",
        }
    }

    /// Parses the stored representation, returning `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "tentative" => Some(Self::Tentative),
            _ => None,
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RsvpDto {
    pub id: i32,
    pub user_id: i32,
    pub class_id: i32,
    pub status: RsvpStatus,
    pub user: UserDto,
}

/// Body of `POST /api/classes/{class_id}/rsvp`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRsvpDto {
    pub telegram_id: i64,
    pub status: RsvpStatus,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}
