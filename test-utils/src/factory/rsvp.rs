//! RSVP factory for creating test attendance records.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test RSVPs.
///
/// Inserts directly, so the unique `(user_id, class_id)` index applies: building a
/// second RSVP for the same pair fails.
pub struct RsvpFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    class_id: i32,
    status: String,
}

impl<'a> RsvpFactory<'a> {
    /// Creates a new RsvpFactory with status `"yes"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, class_id: i32) -> Self {
        Self {
            db,
            user_id,
            class_id,
            status: "yes".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::rsvp::Model, DbErr> {
        entity::rsvp::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            class_id: ActiveValue::Set(self.class_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `"yes"` RSVP for the given user and class.
pub async fn create_rsvp(
    db: &DatabaseConnection,
    user_id: i32,
    class_id: i32,
) -> Result<entity::rsvp::Model, DbErr> {
    RsvpFactory::new(db, user_id, class_id).build().await
}
