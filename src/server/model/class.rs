//! Class domain models and parameters.
//!
//! Defines the class aggregate returned by reads (with creator, RSVPs and questions
//! attached), the raw relation bundle produced by the repository, and the parameter
//! types for create, update and delete.

use chrono::{DateTime, Utc};

use crate::{
    model::class::{ClassDto, ClassPatchDto, CreateClassDto, UpdateClassDto},
    server::{
        error::AppError,
        model::{question::Question, rsvp::Rsvp, user::ResolveUserParam, user::User},
    },
};

/// Scheduled class with its creator and attendance loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// Unique identifier for the class.
    pub id: i32,
    /// Short title of the class.
    pub topic: String,
    /// Free-text description.
    pub description: String,
    /// When the class takes place.
    pub class_time: DateTime<Utc>,
    /// Primary key of the creating user.
    pub creator_id: i32,
    /// The creating user; sole authority for updates and deletion.
    pub creator: User,
    /// RSVPs for this class, each with its user.
    pub rsvps: Vec<Rsvp>,
    /// Questions about this class. Empty unless loaded explicitly.
    pub questions: Vec<Question>,
}

impl Class {
    /// Converts the raw relation bundle loaded by the repository.
    ///
    /// # Returns
    /// - `Ok(Class)` - The converted class
    /// - `Err(AppError::InternalErr)` - A stored RSVP status could not be parsed
    pub fn from_with_relations(relations: ClassWithRelations) -> Result<Self, AppError> {
        let rsvps = relations
            .rsvps
            .into_iter()
            .map(|(rsvp, user)| Rsvp::from_entity(rsvp, User::from_entity(user)))
            .collect::<Result<Vec<_>, _>>()?;

        let questions = relations
            .questions
            .into_iter()
            .map(|(question, user)| Question::from_entity(question, User::from_entity(user)))
            .collect();

        Ok(Self {
            id: relations.class.id,
            topic: relations.class.topic,
            description: relations.class.description,
            class_time: relations.class.class_time,
            creator_id: relations.class.creator_id,
            creator: User::from_entity(relations.creator),
            rsvps,
            questions,
        })
    }

    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            topic: self.topic,
            description: self.description,
            class_time: self.class_time,
            creator_id: self.creator_id,
            creator: self.creator.into_dto(),
            rsvps: self.rsvps.into_iter().map(Rsvp::into_dto).collect(),
            questions: self.questions.into_iter().map(Question::into_dto).collect(),
        }
    }
}

/// Class row with its related rows as loaded from the database.
#[derive(Debug, Clone)]
pub struct ClassWithRelations {
    pub class: entity::class::Model,
    pub creator: entity::user::Model,
    pub rsvps: Vec<(entity::rsvp::Model, entity::user::Model)>,
    pub questions: Vec<(entity::question::Model, entity::user::Model)>,
}

/// Parameters for creating a new class.
#[derive(Debug, Clone)]
pub struct CreateClassParams {
    pub topic: String,
    pub description: String,
    pub class_time: DateTime<Utc>,
    /// Identity and profile of the creator, resolved or created before insert.
    pub creator: ResolveUserParam,
}

impl CreateClassParams {
    pub fn from_dto(dto: CreateClassDto) -> Self {
        Self {
            topic: dto.topic,
            description: dto.description,
            class_time: dto.class_time,
            creator: ResolveUserParam {
                telegram_id: dto.creator_telegram_id,
                first_name: dto.creator_first_name,
                last_name: dto.creator_last_name,
                username: dto.creator_username,
            },
        }
    }
}

/// Partial update of a class. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassPatch {
    pub topic: Option<String>,
    pub description: Option<String>,
    pub class_time: Option<DateTime<Utc>>,
}

impl ClassPatch {
    pub fn from_dto(dto: ClassPatchDto) -> Self {
        Self {
            topic: dto.topic,
            description: dto.description,
            class_time: dto.class_time,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.description.is_none() && self.class_time.is_none()
    }
}

/// Parameters for updating an existing class.
#[derive(Debug, Clone)]
pub struct UpdateClassParams {
    /// ID of the class to update.
    pub class_id: i32,
    /// Telegram ID of the caller; must belong to the class creator.
    pub updater_telegram_id: i64,
    pub patch: ClassPatch,
}

impl UpdateClassParams {
    pub fn from_dto(class_id: i32, dto: UpdateClassDto) -> Self {
        Self {
            class_id,
            updater_telegram_id: dto.updater_telegram_id,
            patch: ClassPatch::from_dto(dto.update_data),
        }
    }
}

/// Parameters for deleting a class.
#[derive(Debug, Clone)]
pub struct DeleteClassParams {
    /// ID of the class to delete.
    pub class_id: i32,
    /// Telegram ID of the caller; must belong to the class creator.
    pub deleter_telegram_id: i64,
}

/// Offset/limit window over classes in insertion order.
#[derive(Debug, Clone)]
pub struct ListClassesParams {
    pub skip: u64,
    pub limit: u64,
}
