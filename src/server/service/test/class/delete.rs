use super::*;

/// Tests deletion by the creator.
///
/// Expected: Ok and the class is gone
#[tokio::test]
async fn creator_deletes_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class_id = create_class(db, "Go 101", 42).await?;

    let service = ClassService::new(db);
    service
        .delete(DeleteClassParams {
            class_id,
            deleter_telegram_id: 42,
        })
        .await?;

    assert!(service.get(class_id).await?.is_none());

    Ok(())
}

/// Tests deletion by a user who is not the creator.
///
/// Expected: Err(AppError::Forbidden) and the class still present
#[tokio::test]
async fn non_creator_cannot_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class_id = create_class(db, "Go 101", 42).await?;
    factory::user::create_user_with_telegram_id(db, 99).await?;

    let service = ClassService::new(db);
    let result = service
        .delete(DeleteClassParams {
            class_id,
            deleter_telegram_id: 99,
        })
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(service.get(class_id).await?.is_some());

    Ok(())
}

/// Tests deleting a class with RSVPs.
///
/// Expected: Ok with the class and its RSVPs removed
#[tokio::test]
async fn removes_rsvps_with_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user_with_telegram_id(db, 42).await?;
    let class = factory::create_class(db, creator.id).await?;
    let attendee = factory::create_user(db).await?;
    factory::create_rsvp(db, attendee.id, class.id).await?;

    let service = ClassService::new(db);
    service
        .delete(DeleteClassParams {
            class_id: class.id,
            deleter_telegram_id: 42,
        })
        .await?;

    assert_eq!(entity::prelude::Rsvp::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a class that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_telegram_id(db, 42).await?;

    let service = ClassService::new(db);
    let result = service
        .delete(DeleteClassParams {
            class_id: 5,
            deleter_telegram_id: 42,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
