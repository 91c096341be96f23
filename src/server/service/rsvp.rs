use sea_orm::DatabaseConnection;

use crate::server::{
    data::{class::ClassRepository, rsvp::RsvpRepository},
    error::AppError,
    model::rsvp::{Rsvp, UpsertRsvpParams},
    service::user::UserService,
};

pub struct RsvpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the attendee's status for a class, replacing any earlier answer
    ///
    /// The attendee is created on first sight. At most one RSVP exists per
    /// (attendee, class) pair and it always holds the most recent status.
    ///
    /// # Returns
    /// - `Ok(Rsvp)`: The stored RSVP with its user
    /// - `Err(AppError::NotFound)`: Class does not exist
    pub async fn upsert(&self, params: UpsertRsvpParams) -> Result<Rsvp, AppError> {
        let attendee = UserService::new(self.db)
            .resolve_or_create(params.attendee)
            .await?;

        if ClassRepository::new(self.db)
            .find_by_id(params.class_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        let rsvp = RsvpRepository::new(self.db)
            .upsert(attendee.id, params.class_id, params.status)
            .await?;

        tracing::debug!(
            "User {} answered '{}' for class {}",
            attendee.id,
            params.status,
            params.class_id
        );

        Rsvp::from_entity(rsvp, attendee)
    }
}
