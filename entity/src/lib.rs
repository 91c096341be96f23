//! SeaORM entities for the class board record store.

pub mod prelude;

pub mod class;
pub mod question;
pub mod rsvp;
pub mod user;
