//! Wire-level data transfer objects.
//!
//! These types define the JSON bodies exchanged with the web client. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod class;
pub mod question;
pub mod rsvp;
pub mod user;
