use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        class::{ClassDto, ClassPatchDto, CreateClassDto, DeletedClassDto, UpdateClassDto},
        question::QuestionDto,
        rsvp::{CreateRsvpDto, RsvpDto, RsvpStatus},
        user::UserDto,
    },
    server::{
        config::Config,
        controller::{
            class::{self, CLASS_TAG},
            rsvp::{self, RSVP_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Classboard", description = "Class scheduling and RSVP API"),
    paths(
        class::create_class,
        class::get_classes,
        class::get_class,
        class::update_class,
        class::delete_class,
        rsvp::rsvp_to_class,
    ),
    components(schemas(
        ClassDto,
        ClassPatchDto,
        CreateClassDto,
        CreateRsvpDto,
        DeletedClassDto,
        ErrorDto,
        QuestionDto,
        RsvpDto,
        RsvpStatus,
        UpdateClassDto,
        UserDto,
    )),
    tags(
        (name = CLASS_TAG, description = "Class registry"),
        (name = RSVP_TAG, description = "Class attendance"),
    )
)]
pub struct ApiDoc;

pub fn router(config: &Config) -> Router<AppState> {
    let api = Router::new()
        .route(
            "/api/classes",
            get(class::get_classes).post(class::create_class),
        )
        .route(
            "/api/classes/",
            get(class::get_classes).post(class::create_class),
        )
        .route(
            "/api/classes/{class_id}",
            get(class::get_class)
                .put(class::update_class)
                .delete(class::delete_class),
        )
        .route("/api/classes/{class_id}/rsvp", post(rsvp::rsvp_to_class))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    match &config.cors_allowed_origin {
        Some(origin) => api.layer(
            CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        None => api,
    }
}
