use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{question::QuestionDto, rsvp::RsvpDto, user::UserDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassDto {
    pub id: i32,
    pub topic: String,
    pub description: String,
    pub class_time: DateTime<Utc>,
    pub creator_id: i32,
    pub creator: UserDto,
    pub rsvps: Vec<RsvpDto>,
    pub questions: Vec<QuestionDto>,
}

/// Body of `POST /api/classes`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClassDto {
    pub topic: String,
    pub description: String,
    pub class_time: DateTime<Utc>,
    pub creator_telegram_id: i64,
    pub creator_first_name: String,
    #[serde(default)]
    pub creator_last_name: Option<String>,
    #[serde(default)]
    pub creator_username: Option<String>,
}

/// Body of `PUT /api/classes/{class_id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateClassDto {
    pub updater_telegram_id: i64,
    #[serde(default)]
    pub update_data: ClassPatchDto,
}

/// Fields to change on a class; absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ClassPatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_time: Option<DateTime<Utc>>,
}

/// Response of `DELETE /api/classes/{class_id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeletedClassDto {
    pub status: String,
    pub class_id: i32,
}
