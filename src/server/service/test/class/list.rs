use super::*;

/// Tests listing right after creating a class.
///
/// Expected: Ok with exactly one class, topic "Go 101", creator Telegram ID 42
#[tokio::test]
async fn lists_created_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_class(db, "Go 101", 42).await?;

    let service = ClassService::new(db);
    let classes = service
        .list(ListClassesParams { skip: 0, limit: 10 })
        .await?;

    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].topic, "Go 101");
    assert_eq!(classes[0].creator.telegram_id, 42);

    Ok(())
}

/// Tests the listing window.
///
/// Expected: Ok with classes in creation order, skipping the first
#[tokio::test]
async fn applies_window_in_creation_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for topic in ["First", "Second", "Third"] {
        create_class(db, topic, 1).await?;
    }

    let service = ClassService::new(db);
    let classes = service.list(ListClassesParams { skip: 1, limit: 5 }).await?;

    let topics: Vec<&str> = classes.iter().map(|c| c.topic.as_str()).collect();
    assert_eq!(topics, vec!["Second", "Third"]);

    Ok(())
}

/// Tests listing an empty registry.
///
/// Expected: Ok with no classes
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClassService::new(db);
    let classes = service
        .list(ListClassesParams { skip: 0, limit: 100 })
        .await?;

    assert!(classes.is_empty());

    Ok(())
}

/// Tests that a stored status outside the known set is reported.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_class_with_rsvp(db, "maybe").await?;

    let service = ClassService::new(db);
    let result = service
        .list(ListClassesParams { skip: 0, limit: 100 })
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

/// Tests the largest limit a query string can carry.
///
/// Expected: Ok with every class
#[tokio::test]
async fn accepts_maximum_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_class(db, "Go 101", 42).await?;

    let service = ClassService::new(db);
    let classes = service
        .list(ListClassesParams {
            skip: 0,
            limit: u64::MAX,
        })
        .await?;

    assert_eq!(classes.len(), 1);

    Ok(())
}
