//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up and lazily creating user
//! records keyed by Telegram ID.

use crate::server::model::user::{ResolveUserParam, User};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for resolving users by Telegram ID and loading them in bulk.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their Telegram ID.
    ///
    /// # Arguments
    /// - `telegram_id` - External Telegram identity
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that Telegram ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::TelegramId.eq(telegram_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a user, or returns the stored one if the Telegram ID is already taken.
    ///
    /// A conflict on `telegram_id` rewrites the column with its own value, so the
    /// statement always returns a row and never changes the stored profile. Concurrent
    /// first sightings of the same Telegram ID therefore converge on one record.
    ///
    /// # Arguments
    /// - `param` - Telegram ID and profile to insert
    ///
    /// # Returns
    /// - `Ok(User)` - The newly inserted or previously stored user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_or_get(&self, param: ResolveUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            telegram_id: ActiveValue::Set(param.telegram_id),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            username: ActiveValue::Set(param.username),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::TelegramId)
                .update_column(entity::user::Column::TelegramId)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Loads the users with the given primary keys, keyed by ID.
    ///
    /// Used to attach creators and attendees to classes in a single query.
    ///
    /// # Arguments
    /// - `ids` - Primary keys to load; duplicates are fine
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, entity::user::Model>)` - Found users (missing IDs are absent)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(users)
    }
}
