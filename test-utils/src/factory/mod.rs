//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! the `helpers` module creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let class = factory::class::create_class(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (creator, class) = factory::helpers::create_class_with_creator(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .telegram_id(42)
//!     .first_name("Ada")
//!     .build()
//!     .await?;
//! ```

pub mod class;
pub mod helpers;
pub mod question;
pub mod rsvp;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use class::create_class;
pub use question::create_question;
pub use rsvp::create_rsvp;
pub use user::create_user;
