use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored RSVP status outside of `yes | no | tentative`.
    ///
    /// Statuses are validated before every write, so this only occurs if the table was
    /// modified by something other than this service. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error("Stored RSVP {rsvp_id} has unknown status '{value}'")]
    UnknownRsvpStatus {
        /// Primary key of the offending RSVP
        rsvp_id: i32,
        /// The stored status value
        value: String,
    },
}
