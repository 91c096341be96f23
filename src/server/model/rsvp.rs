//! RSVP domain models and parameters.

use crate::{
    model::rsvp::{CreateRsvpDto, RsvpDto, RsvpStatus},
    server::{
        error::{internal::InternalError, AppError},
        model::user::{ResolveUserParam, User},
    },
};

/// Attendance record, unique per (user, class) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Rsvp {
    pub id: i32,
    pub user_id: i32,
    pub class_id: i32,
    pub status: RsvpStatus,
    /// The attending user.
    pub user: User,
}

impl Rsvp {
    /// Converts an entity model and its loaded user into the domain model.
    ///
    /// # Returns
    /// - `Ok(Rsvp)` - The converted RSVP
    /// - `Err(AppError::InternalErr(UnknownRsvpStatus))` - Stored status is outside
    ///   `yes | no | tentative`
    pub fn from_entity(entity: entity::rsvp::Model, user: User) -> Result<Self, AppError> {
        let status =
            RsvpStatus::parse(&entity.status).ok_or_else(|| InternalError::UnknownRsvpStatus {
                rsvp_id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            class_id: entity.class_id,
            status,
            user,
        })
    }

    pub fn into_dto(self) -> RsvpDto {
        RsvpDto {
            id: self.id,
            user_id: self.user_id,
            class_id: self.class_id,
            status: self.status,
            user: self.user.into_dto(),
        }
    }
}

/// Parameters for recording a user's attendance status for a class.
#[derive(Debug, Clone)]
pub struct UpsertRsvpParams {
    /// ID of the class being answered.
    pub class_id: i32,
    /// Identity and profile of the attendee.
    pub attendee: ResolveUserParam,
    /// New attendance status.
    pub status: RsvpStatus,
}

impl UpsertRsvpParams {
    pub fn from_dto(class_id: i32, dto: CreateRsvpDto) -> Self {
        Self {
            class_id,
            attendee: ResolveUserParam {
                telegram_id: dto.telegram_id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                username: dto.username,
            },
            status: dto.status,
        }
    }
}
