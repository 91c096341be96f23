use super::*;

/// Tests loading several users by primary key.
///
/// Verifies that duplicate IDs are tolerated and unknown IDs are simply absent
/// from the returned map.
///
/// Expected: Ok with a map holding exactly the existing users
#[tokio::test]
async fn loads_users_keyed_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[a.id, b.id, a.id, 9999]).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users.get(&a.id), Some(&a));
    assert_eq!(users.get(&b.id), Some(&b));
    assert!(!users.contains_key(&9999));

    Ok(())
}

/// Tests loading with no IDs.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_class_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
