use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub user_id: i32,
    pub class_id: i32,
    pub text: String,
    pub user: UserDto,
}
