mod rsvp;
mod user;
