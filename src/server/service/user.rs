//! Identity resolution for Telegram users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{ResolveUserParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user for the Telegram ID, creating it from the supplied profile if
    /// this is the first time the ID is seen.
    ///
    /// An existing user's profile is never updated, even if the caller sends different
    /// names.
    pub async fn resolve_or_create(&self, param: ResolveUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.find_by_telegram_id(param.telegram_id).await? {
            return Ok(user);
        }

        let user = repo.insert_or_get(param).await?;

        tracing::debug!(
            "Resolved new user {} for Telegram ID {}",
            user.id,
            user.telegram_id
        );

        Ok(user)
    }

    /// Looks up an existing user without creating one
    ///
    /// # Returns
    /// - `Ok(User)`: User registered with this Telegram ID
    /// - `Err(AppError::NotFound)`: No such user
    pub async fn require_by_telegram_id(&self, telegram_id: i64) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_telegram_id(telegram_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
