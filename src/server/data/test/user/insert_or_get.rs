use super::*;

fn param(telegram_id: i64, first_name: &str) -> ResolveUserParam {
    ResolveUserParam {
        telegram_id,
        first_name: first_name.to_string(),
        last_name: None,
        username: None,
    }
}

/// Tests inserting a user for a new Telegram ID.
///
/// Verifies that all supplied profile fields are stored.
///
/// Expected: Ok with a new user carrying the supplied profile
#[tokio::test]
async fn inserts_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .insert_or_get(ResolveUserParam {
            telegram_id: 100,
            first_name: "Grace".to_string(),
            last_name: Some("Hopper".to_string()),
            username: Some("grace".to_string()),
        })
        .await?;

    assert_eq!(user.telegram_id, 100);
    assert_eq!(user.first_name, "Grace");
    assert_eq!(user.last_name, Some("Hopper".to_string()));
    assert_eq!(user.username, Some("grace".to_string()));

    Ok(())
}

/// Tests inserting a Telegram ID that already exists.
///
/// Verifies that the conflicting insert returns the stored record and leaves
/// its profile untouched instead of failing on the unique constraint.
///
/// Expected: Ok with the original user, one row in the table
#[tokio::test]
async fn returns_existing_user_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.insert_or_get(param(100, "Original")).await?;
    let second = repo.insert_or_get(param(100, "Renamed")).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.first_name, "Original");
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests inserting users with different Telegram IDs.
///
/// Expected: Ok with two distinct users
#[tokio::test]
async fn inserts_distinct_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let a = repo.insert_or_get(param(1, "A")).await?;
    let b = repo.insert_or_get(param(2, "B")).await?;

    assert_ne!(a.id, b.id);
    assert_eq!(entity::prelude::User::find().count(db).await?, 2);

    Ok(())
}
