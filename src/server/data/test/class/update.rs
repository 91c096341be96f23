use super::*;

/// Tests a partial update.
///
/// Verifies that only the fields present in the patch change.
///
/// Expected: Ok with new topic, description and time unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_creator(db).await?;

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(
            class.id,
            ClassPatch {
                topic: Some("Go 201".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.topic, "Go 201");
    assert_eq!(updated.description, class.description);
    assert_eq!(updated.class_time, class.class_time);

    let stored = entity::prelude::Class::find_by_id(class.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.topic, "Go 201");

    Ok(())
}

/// Tests updating every field at once.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_creator(db).await?;
    let new_time = Utc.with_ymd_and_hms(2031, 6, 1, 9, 30, 0).unwrap();

    let repo = ClassRepository::new(db);
    let updated = repo
        .update(
            class.id,
            ClassPatch {
                topic: Some("Rust".to_string()),
                description: Some("Ownership".to_string()),
                class_time: Some(new_time),
            },
        )
        .await?;

    assert_eq!(updated.topic, "Rust");
    assert_eq!(updated.description, "Ownership");
    assert_eq!(updated.class_time, new_time);
    assert_eq!(updated.creator_id, class.creator_id);

    Ok(())
}

/// Tests an empty patch.
///
/// Expected: Ok with the class unchanged
#[tokio::test]
async fn empty_patch_returns_class_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_creator(db).await?;

    let repo = ClassRepository::new(db);
    let updated = repo.update(class.id, ClassPatch::default()).await?;

    assert_eq!(updated, class);

    Ok(())
}

/// Tests updating a class that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let result = repo
        .update(
            42,
            ClassPatch {
                topic: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
