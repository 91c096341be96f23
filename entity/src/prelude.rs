pub use super::class::Entity as Class;
pub use super::question::Entity as Question;
pub use super::rsvp::Entity as Rsvp;
pub use super::user::Entity as User;
