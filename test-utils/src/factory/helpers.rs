//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests. Starts high so generated Telegram IDs
/// never clash with the small literal IDs tests pick for themselves.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a class owned by that user.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((creator, class))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_class_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::class::Model), DbErr> {
    let creator = crate::factory::user::create_user(db).await?;
    let class = crate::factory::class::create_class(db, creator.id).await?;

    Ok((creator, class))
}

/// Creates a class with one attendee who has answered with the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - RSVP status stored for the attendee
///
/// # Returns
/// - `Ok((creator, class, attendee, rsvp))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_class_with_rsvp(
    db: &DatabaseConnection,
    status: &str,
) -> Result<
    (
        entity::user::Model,
        entity::class::Model,
        entity::user::Model,
        entity::rsvp::Model,
    ),
    DbErr,
> {
    let (creator, class) = create_class_with_creator(db).await?;
    let attendee = crate::factory::user::create_user(db).await?;
    let rsvp = crate::factory::rsvp::RsvpFactory::new(db, attendee.id, class.id)
        .status(status)
        .build()
        .await?;

    Ok((creator, class, attendee, rsvp))
}
