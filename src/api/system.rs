use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::HealthDto;
use crate::constants::messages::{INTERNAL_ERROR, ROUTE_NOT_FOUND};

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto::ok())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}

/// Turns a handler panic into a plain 500 so the server keeps running.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(event = "handler_panicked", panic = %detail, "Request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
}
