use super::{caller, class_time};
use crate::server::{
    error::AppError,
    model::class::{
        ClassPatch, CreateClassParams, DeleteClassParams, ListClassesParams, UpdateClassParams,
    },
    service::class::ClassService,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;

fn create_params(topic: &str, creator_telegram_id: i64) -> CreateClassParams {
    CreateClassParams {
        topic: topic.to_string(),
        description: format!("About {}", topic),
        class_time: class_time(),
        creator: caller(creator_telegram_id),
    }
}

/// Creates a class through the service and returns its ID
async fn create_class(
    db: &DatabaseConnection,
    topic: &str,
    creator_telegram_id: i64,
) -> Result<i32, AppError> {
    let class = ClassService::new(db)
        .create(create_params(topic, creator_telegram_id))
        .await?;

    Ok(class.id)
}
