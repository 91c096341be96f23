use sea_orm::DatabaseConnection;

use crate::server::{
    data::class::ClassRepository,
    error::AppError,
    model::class::{
        Class, CreateClassParams, DeleteClassParams, ListClassesParams, UpdateClassParams,
    },
    service::user::UserService,
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a class, resolving or creating its creator first
    pub async fn create(&self, params: CreateClassParams) -> Result<Class, AppError> {
        let creator = UserService::new(self.db)
            .resolve_or_create(params.creator)
            .await?;

        let repo = ClassRepository::new(self.db);
        let class = repo
            .create(
                creator.id,
                params.topic,
                params.description,
                params.class_time,
            )
            .await?;

        tracing::info!(
            "Class {} '{}' created by user {}",
            class.id,
            class.topic,
            creator.id
        );

        self.require(class.id).await
    }

    /// Gets a window of classes in insertion order
    pub async fn list(&self, params: ListClassesParams) -> Result<Vec<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        let classes = repo.get_page(params.skip, params.limit).await?;

        classes
            .into_iter()
            .map(Class::from_with_relations)
            .collect()
    }

    /// Gets a specific class by ID with RSVPs and questions
    pub async fn get(&self, id: i32) -> Result<Option<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .map(Class::from_with_relations)
            .transpose()
    }

    /// Applies a partial update on behalf of the class creator
    ///
    /// # Returns
    /// - `Ok(Class)`: The updated class
    /// - `Err(AppError::NotFound)`: Updater or class does not exist
    /// - `Err(AppError::Forbidden)`: Updater is not the creator of this class
    pub async fn update(&self, params: UpdateClassParams) -> Result<Class, AppError> {
        self.authorize_owner(params.class_id, params.updater_telegram_id, "update")
            .await?;

        ClassRepository::new(self.db)
            .update(params.class_id, params.patch)
            .await?;

        tracing::info!("Class {} updated", params.class_id);

        self.require(params.class_id).await
    }

    /// Deletes a class and its RSVPs and questions on behalf of the class creator
    ///
    /// # Returns
    /// - `Ok(())`: Class deleted
    /// - `Err(AppError::NotFound)`: Deleter or class does not exist
    /// - `Err(AppError::Forbidden)`: Deleter is not the creator of this class
    pub async fn delete(&self, params: DeleteClassParams) -> Result<(), AppError> {
        self.authorize_owner(params.class_id, params.deleter_telegram_id, "delete")
            .await?;

        ClassRepository::new(self.db).delete(params.class_id).await?;

        tracing::info!("Class {} deleted", params.class_id);

        Ok(())
    }

    /// Checks that `telegram_id` belongs to the creator of the class being modified
    ///
    /// The ownership check always runs against the class named by `class_id`, never
    /// against some other row.
    async fn authorize_owner(
        &self,
        class_id: i32,
        telegram_id: i64,
        action: &str,
    ) -> Result<(), AppError> {
        let user = UserService::new(self.db)
            .require_by_telegram_id(telegram_id)
            .await?;

        let class = ClassRepository::new(self.db)
            .find_by_id(class_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        if class.creator_id != user.id {
            tracing::warn!(
                "User {} attempted to {} class {} owned by user {}",
                user.id,
                action,
                class_id,
                class.creator_id
            );

            return Err(AppError::Forbidden(format!(
                "Not authorized to {} this class",
                action
            )));
        }

        Ok(())
    }

    /// Gets a class by ID with RSVPs and questions, treating a missing class as an error
    ///
    /// Also used to re-read a class after a write, so a concurrent delete surfaces as
    /// 404 rather than a server error.
    ///
    /// # Returns
    /// - `Ok(Class)`: The class
    /// - `Err(AppError::NotFound)`: No class with this ID
    pub async fn require(&self, id: i32) -> Result<Class, AppError> {
        self.get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))
    }
}
