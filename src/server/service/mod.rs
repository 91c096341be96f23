//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Identity**: Resolving callers by Telegram ID, creating users on first sight
//! - **Authorization**: Restricting class updates and deletion to the creator
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod class;
pub mod rsvp;
pub mod user;

#[cfg(test)]
mod test;
