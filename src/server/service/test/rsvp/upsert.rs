use super::*;

/// Tests the first RSVP from a new attendee.
///
/// Verifies that the attendee is created on first sight.
///
/// Expected: Ok with the RSVP and its user
#[tokio::test]
async fn creates_attendee_and_rsvp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_creator(db).await?;

    let service = RsvpService::new(db);
    let rsvp = service.upsert(params(class.id, 7, RsvpStatus::Yes)).await?;

    assert_eq!(rsvp.class_id, class.id);
    assert_eq!(rsvp.status, RsvpStatus::Yes);
    assert_eq!(rsvp.user.telegram_id, 7);
    assert_eq!(rsvp.user_id, rsvp.user.id);

    Ok(())
}

/// Tests answering yes and then no.
///
/// Expected: Ok with exactly one RSVP for the pair holding "no"
#[tokio::test]
async fn latest_status_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_creator(db).await?;

    let service = RsvpService::new(db);
    let first = service.upsert(params(class.id, 7, RsvpStatus::Yes)).await?;
    let second = service.upsert(params(class.id, 7, RsvpStatus::No)).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.status, RsvpStatus::No);

    let stored = entity::prelude::Rsvp::find()
        .filter(entity::rsvp::Column::ClassId.eq(class.id))
        .filter(entity::rsvp::Column::UserId.eq(first.user_id))
        .all(db)
        .await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, "no");

    Ok(())
}

/// Tests many repeated answers for one pair.
///
/// Expected: Ok with one RSVP holding the last status
#[tokio::test]
async fn repeated_upserts_keep_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, class) = factory::helpers::create_class_with_creator(db).await?;

    let service = RsvpService::new(db);
    let statuses = [
        RsvpStatus::Yes,
        RsvpStatus::Tentative,
        RsvpStatus::No,
        RsvpStatus::Tentative,
    ];
    for status in statuses {
        service.upsert(params(class.id, 7, status)).await?;
    }

    let stored = entity::prelude::Rsvp::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, "tentative");

    Ok(())
}

/// Tests an RSVP to a class that does not exist.
///
/// Expected: Err(AppError::NotFound) with no RSVP stored
#[tokio::test]
async fn rejects_missing_class() -> Result<(), AppError> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RsvpService::new(db);
    let result = service.upsert(params(404, 7, RsvpStatus::Yes)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Rsvp::find().count(db).await?, 0);

    Ok(())
}
