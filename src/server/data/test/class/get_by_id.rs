use super::*;

/// Tests getting a class with all relations.
///
/// Verifies that the creator, every RSVP with its user and every question with its
/// user are attached.
///
/// Expected: Ok(Some) with creator, one RSVP and one question
#[tokio::test]
async fn loads_class_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, class, attendee, rsvp) =
        factory::helpers::create_class_with_rsvp(db, "tentative").await?;
    let asker = factory::create_user(db).await?;
    let question = factory::question::QuestionFactory::new(db, asker.id, class.id)
        .text("Is there homework?")
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let loaded = repo.get_by_id(class.id).await?.unwrap();

    assert_eq!(loaded.class, class);
    assert_eq!(loaded.creator, creator);
    assert_eq!(loaded.rsvps, vec![(rsvp, attendee)]);
    assert_eq!(loaded.questions, vec![(question, asker)]);

    Ok(())
}

/// Tests getting a class that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that relations are scoped to the requested class.
///
/// Verifies that RSVPs belonging to another class are not attached.
///
/// Expected: Ok(Some) with no RSVPs
#[tokio::test]
async fn ignores_rsvps_of_other_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, empty_class) = factory::helpers::create_class_with_creator(db).await?;
    factory::helpers::create_class_with_rsvp(db, "yes").await?;

    let repo = ClassRepository::new(db);
    let loaded = repo.get_by_id(empty_class.id).await?.unwrap();

    assert!(loaded.rsvps.is_empty());
    assert!(loaded.questions.is_empty());

    Ok(())
}
