//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories borrow the connection handed to them by the
//! service layer and use SeaORM entity models internally.

pub mod class;
pub mod rsvp;
pub mod user;

#[cfg(test)]
mod test;
