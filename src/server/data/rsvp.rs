//! RSVP data repository.
//!
//! Writes go through a single conditional insert keyed by the unique
//! `(user_id, class_id)` index, so there is never a read-then-write window in which two
//! requests could both decide to insert.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::rsvp::RsvpStatus;

pub struct RsvpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the RSVP for the pair or overwrites the status of the existing one.
    ///
    /// # Arguments
    /// - `user_id`: Primary key of the attending user
    /// - `class_id`: Primary key of the class
    /// - `status`: Attendance status to store
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored RSVP, same ID as before if one already existed
    /// - `Err(DbErr)`: Database error (including foreign key violations)
    pub async fn upsert(
        &self,
        user_id: i32,
        class_id: i32,
        status: RsvpStatus,
    ) -> Result<entity::rsvp::Model, DbErr> {
        entity::prelude::Rsvp::insert(entity::rsvp::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            class_id: ActiveValue::Set(class_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([entity::rsvp::Column::UserId, entity::rsvp::Column::ClassId])
                .update_column(entity::rsvp::Column::Status)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
