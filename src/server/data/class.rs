use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::user::UserRepository,
    model::class::{ClassPatch, ClassWithRelations},
};

const MAX_BIND: u64 = i64::MAX as u64;

pub struct ClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new class owned by `creator_id`
    ///
    /// # Arguments
    /// - `creator_id`: Primary key of the creating user
    /// - `topic`: Class topic
    /// - `description`: Free-text description
    /// - `class_time`: When the class takes place
    ///
    /// # Returns
    /// - `Ok(Model)`: The created class
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        creator_id: i32,
        topic: String,
        description: String,
        class_time: DateTime<Utc>,
    ) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            topic: ActiveValue::Set(topic),
            description: ActiveValue::Set(description),
            class_time: ActiveValue::Set(class_time),
            creator_id: ActiveValue::Set(creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the class row by ID without loading relations
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::class::Model>, DbErr> {
        entity::prelude::Class::find_by_id(id).one(self.db).await
    }

    /// Gets a class by ID with its creator, RSVPs and questions
    ///
    /// # Returns
    /// - `Ok(Some(ClassWithRelations))`: Class and its related rows
    /// - `Ok(None)`: Class not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClassWithRelations>, DbErr> {
        let Some(class) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut loaded = self.load_relations(vec![class], true).await?;

        Ok(loaded.pop())
    }

    /// Gets a window of classes in insertion order with creators and RSVPs attached
    ///
    /// Questions are not loaded for listings. Windows beyond `i64::MAX` are clamped to it,
    /// the largest value SQLite can bind.
    ///
    /// # Arguments
    /// - `skip`: Number of classes to skip
    /// - `limit`: Maximum number of classes to return
    ///
    /// # Returns
    /// - `Ok(Vec<ClassWithRelations>)`: Classes ordered by ID ascending
    /// - `Err(DbErr)`: Database error
    pub async fn get_page(&self, skip: u64, limit: u64) -> Result<Vec<ClassWithRelations>, DbErr> {
        let classes = entity::prelude::Class::find()
            .order_by_asc(entity::class::Column::Id)
            .offset(skip.min(MAX_BIND))
            .limit(limit.min(MAX_BIND))
            .all(self.db)
            .await?;

        self.load_relations(classes, false).await
    }

    /// Applies the fields present in `patch` to a class
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated class (unchanged if the patch is empty)
    /// - `Err(DbErr::RecordNotFound)`: No class with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, id: i32, patch: ClassPatch) -> Result<entity::class::Model, DbErr> {
        let class = entity::prelude::Class::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Class {} not found", id)))?;

        if patch.is_empty() {
            return Ok(class);
        }

        let mut active_model: entity::class::ActiveModel = class.into();

        if let Some(topic) = patch.topic {
            active_model.topic = ActiveValue::Set(topic);
        }
        if let Some(description) = patch.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(class_time) = patch.class_time {
            active_model.class_time = ActiveValue::Set(class_time);
        }

        active_model.update(self.db).await
    }

    /// Deletes a class together with its RSVPs and questions
    ///
    /// Dependent rows are removed in the same transaction as the class, so no RSVP or
    /// question is left pointing at a deleted class even if foreign key enforcement is
    /// off for the connection.
    ///
    /// # Returns
    /// - `Ok(())`: Class and dependents deleted (or nothing matched)
    /// - `Err(DbErr)`: Database error, transaction rolled back
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Rsvp::delete_many()
            .filter(entity::rsvp::Column::ClassId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Question::delete_many()
            .filter(entity::question::Column::ClassId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Class::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }

    /// Attaches creators, RSVPs with users and optionally questions with users
    ///
    /// Issues one query per related table regardless of how many classes are passed,
    /// then groups the rows by class. Preserves the order of `classes`.
    async fn load_relations(
        &self,
        classes: Vec<entity::class::Model>,
        with_questions: bool,
    ) -> Result<Vec<ClassWithRelations>, DbErr> {
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        let class_ids: Vec<i32> = classes.iter().map(|c| c.id).collect();

        let rsvps = entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::ClassId.is_in(class_ids.clone()))
            .order_by_asc(entity::rsvp::Column::Id)
            .all(self.db)
            .await?;

        let questions = if with_questions {
            entity::prelude::Question::find()
                .filter(entity::question::Column::ClassId.is_in(class_ids))
                .order_by_asc(entity::question::Column::Id)
                .all(self.db)
                .await?
        } else {
            Vec::new()
        };

        // Fetch every referenced user in one query
        let mut user_ids: Vec<i32> = classes.iter().map(|c| c.creator_id).collect();
        user_ids.extend(rsvps.iter().map(|r| r.user_id));
        user_ids.extend(questions.iter().map(|q| q.user_id));
        user_ids.sort_unstable();
        user_ids.dedup();

        let users = UserRepository::new(self.db).get_by_ids(&user_ids).await?;
        let user_for = |kind: &str, row_id: i32, user_id: i32| {
            users.get(&user_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "User {} referenced by {} {} not found",
                    user_id, kind, row_id
                ))
            })
        };

        let mut rsvps_by_class: HashMap<i32, Vec<(entity::rsvp::Model, entity::user::Model)>> =
            HashMap::new();
        for rsvp in rsvps {
            let user = user_for("rsvp", rsvp.id, rsvp.user_id)?;
            rsvps_by_class
                .entry(rsvp.class_id)
                .or_default()
                .push((rsvp, user));
        }

        let mut questions_by_class: HashMap<
            i32,
            Vec<(entity::question::Model, entity::user::Model)>,
        > = HashMap::new();
        for question in questions {
            let user = user_for("question", question.id, question.user_id)?;
            questions_by_class
                .entry(question.class_id)
                .or_default()
                .push((question, user));
        }

        classes
            .into_iter()
            .map(|class| {
                let creator = user_for("class", class.id, class.creator_id)?;
                Ok(ClassWithRelations {
                    rsvps: rsvps_by_class.remove(&class.id).unwrap_or_default(),
                    questions: questions_by_class.remove(&class.id).unwrap_or_default(),
                    creator,
                    class,
                })
            })
            .collect()
    }
}
