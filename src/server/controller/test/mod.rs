use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Path, Query, State},
    http::{header, Method, Request, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        class::{ClassPatchDto, CreateClassDto, UpdateClassDto},
        rsvp::{CreateRsvpDto, RsvpStatus},
    },
    server::state::AppState,
};


fn create_dto(topic: &str, creator_telegram_id: i64) -> CreateClassDto {
    CreateClassDto {
        topic: topic.to_string(),
        description: "Intro".to_string(),
        class_time: Utc.with_ymd_and_hms(2030, 1, 2, 15, 0, 0).unwrap(),
        creator_telegram_id,
        creator_first_name: "Rob".to_string(),
        creator_last_name: None,
        creator_username: None,
    }
}

/// Runs the JSON body extractor over a raw request body, as the router would
async fn json_body<T: DeserializeOwned>(body: &str) -> Result<Json<T>, JsonRejection> {
    let request = Request::builder()
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    Json::<T>::from_request(request, &()).await
}
