use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        rsvp::{CreateRsvpDto, RsvpDto},
    },
    server::{
        error::AppError, model::rsvp::UpsertRsvpParams, service::rsvp::RsvpService,
        state::AppState,
    },
};

/// Tag for grouping RSVP endpoints in OpenAPI documentation
pub static RSVP_TAG: &str = "rsvp";

/// Answer a class invitation.
///
/// Records the attendee's status for the class, replacing any earlier answer from the
/// same attendee. The attendee is created from the supplied profile on first sight.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `class_id` - Class being answered
/// - `payload` - Attendee identity and status (`yes`, `no` or `tentative`)
///
/// # Returns
/// - `200 OK` - The stored RSVP
/// - `400 Bad Request` - Malformed body or unknown status
/// - `404 Not Found` - Class not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classes/{class_id}/rsvp",
    tag = RSVP_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = CreateRsvpDto,
    responses(
        (status = 200, description = "Stored RSVP", body = RsvpDto),
        (status = 400, description = "Malformed request body or unknown status", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rsvp_to_class(
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
    payload: Result<Json<CreateRsvpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = RsvpService::new(&state.db);

    let rsvp = service
        .upsert(UpsertRsvpParams::from_dto(class_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(rsvp.into_dto())))
}
