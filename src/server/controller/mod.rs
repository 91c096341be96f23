//! HTTP handlers for the class board API.
//!
//! Handlers convert DTOs into server parameters, call into the service layer and wrap
//! the resulting domain models back into DTOs. Every handler is annotated for the
//! OpenAPI document served at `/api/docs`.

pub mod class;
pub mod rsvp;

#[cfg(test)]
mod test;
