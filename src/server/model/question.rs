//! Question domain model.
//!
//! Questions are read as part of a class; no operations create or change them here.

use crate::{model::question::QuestionDto, server::model::user::User};

/// Text question asked by a user about a class.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub user_id: i32,
    pub class_id: i32,
    pub text: String,
    /// The user who asked the question.
    pub user: User,
}

impl Question {
    pub fn from_entity(entity: entity::question::Model, user: User) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            class_id: entity.class_id,
            text: entity.text,
            user,
        }
    }

    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            user_id: self.user_id,
            class_id: self.class_id,
            text: self.text,
            user: self.user.into_dto(),
        }
    }
}
