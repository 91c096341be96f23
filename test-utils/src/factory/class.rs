//! Class factory for creating test class entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::class::ClassFactory;
///
/// let class = ClassFactory::new(&db, creator.id)
///     .topic("Go 101")
///     .build()
///     .await?;
/// ```
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    topic: String,
    description: String,
    class_time: DateTime<Utc>,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - topic: `"Class {id}"`
    /// - description: `"Description for class {id}"`
    /// - class_time: one day from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - Primary key of the owning user
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            topic: format!("Class {}", id),
            description: format!("Description for class {}", id),
            class_time: Utc::now() + Duration::days(1),
        }
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn class_time(mut self, class_time: DateTime<Utc>) -> Self {
        self.class_time = class_time;
        self
    }

    /// Builds and inserts the class entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::class::Model)` - Created class entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown creator)
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            topic: ActiveValue::Set(self.topic),
            description: ActiveValue::Set(self.description),
            class_time: ActiveValue::Set(self.class_time),
            creator_id: ActiveValue::Set(self.creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values owned by `creator_id`.
pub async fn create_class(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db, creator_id).build().await
}
