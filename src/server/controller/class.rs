use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        class::{ClassDto, CreateClassDto, DeletedClassDto, UpdateClassDto},
    },
    server::{
        error::AppError,
        model::class::{
            Class, CreateClassParams, DeleteClassParams, ListClassesParams, UpdateClassParams,
        },
        service::class::ClassService,
        state::AppState,
    },
};

/// Tag for grouping class endpoints in OpenAPI documentation
pub static CLASS_TAG: &str = "class";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListClassesQuery {
    /// Number of classes to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of classes to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteClassQuery {
    /// Telegram ID of the caller; must be the class creator
    pub deleter_telegram_id: i64,
}

/// Create a new class.
///
/// Resolves the creator by Telegram ID, creating them from the supplied profile on
/// first sight, and stores the class with them as owner.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Class fields and creator identity
///
/// # Returns
/// - `200 OK` - The created class with its creator
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/classes",
    tag = CLASS_TAG,
    request_body = CreateClassDto,
    responses(
        (status = 200, description = "Successfully created class", body = ClassDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = ClassService::new(&state.db);

    let class = service.create(CreateClassParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// List classes.
///
/// Returns classes in creation order with their creators and RSVPs. Questions are
/// only included when fetching a single class.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Offset and limit of the window, defaulting to 0 and 100
///
/// # Returns
/// - `200 OK` - Classes in the requested window
/// - `400 Bad Request` - Negative or non-numeric window parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = CLASS_TAG,
    params(ListClassesQuery),
    responses(
        (status = 200, description = "Classes in the requested window", body = Vec<ClassDto>),
        (status = 400, description = "Invalid window parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(query): Query<ListClassesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db);

    let classes = service
        .list(ListClassesParams {
            skip: query.skip,
            limit: query.limit,
        })
        .await?;

    let classes: Vec<ClassDto> = classes.into_iter().map(Class::into_dto).collect();

    Ok((StatusCode::OK, Json(classes)))
}

/// Get a single class with RSVPs and questions.
///
/// # Returns
/// - `200 OK` - The class
/// - `404 Not Found` - No class with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/classes/{class_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "The class", body = ClassDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db);

    let class = service.require(class_id).await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Update a class.
///
/// Applies the fields present in `update_data`. Only the creator of the class may
/// update it; the updater must already be a known user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `class_id` - Class to update
/// - `payload` - Updater identity and partial patch
///
/// # Returns
/// - `200 OK` - The updated class
/// - `400 Bad Request` - Malformed body
/// - `403 Forbidden` - Updater is not the class creator
/// - `404 Not Found` - Updater or class not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/classes/{class_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Successfully updated class", body = ClassDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 403, description = "Updater is not the class creator", body = ErrorDto),
        (status = 404, description = "Updater or class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
    payload: Result<Json<UpdateClassDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = ClassService::new(&state.db);

    let class = service
        .update(UpdateClassParams::from_dto(class_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Delete a class.
///
/// Removes the class together with its RSVPs and questions. Only the creator of the
/// class may delete it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `class_id` - Class to delete
/// - `query` - Telegram ID of the deleter
///
/// # Returns
/// - `200 OK` - `{"status": "deleted", "class_id": ..}`
/// - `400 Bad Request` - Missing or non-numeric `deleter_telegram_id`
/// - `403 Forbidden` - Deleter is not the class creator
/// - `404 Not Found` - Deleter or class not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/classes/{class_id}",
    tag = CLASS_TAG,
    params(
        ("class_id" = i32, Path, description = "Class ID"),
        DeleteClassQuery
    ),
    responses(
        (status = 200, description = "Successfully deleted class", body = DeletedClassDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "Deleter is not the class creator", body = ErrorDto),
        (status = 404, description = "Deleter or class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
    Query(query): Query<DeleteClassQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClassService::new(&state.db);

    service
        .delete(DeleteClassParams {
            class_id,
            deleter_telegram_id: query.deleter_telegram_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeletedClassDto {
            status: "deleted".to_string(),
            class_id,
        }),
    ))
}
