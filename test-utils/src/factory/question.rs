//! Question factory.
//!
//! Questions have no service operations of their own, so tests insert them here to
//! exercise class reads and cascading deletes.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    class_id: i32,
    text: String,
}

impl<'a> QuestionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, class_id: i32) -> Self {
        Self {
            db,
            user_id,
            class_id,
            text: format!("Question {}?", next_id()),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            class_id: ActiveValue::Set(self.class_id),
            text: ActiveValue::Set(self.text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_question(
    db: &DatabaseConnection,
    user_id: i32,
    class_id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, user_id, class_id).build().await
}
