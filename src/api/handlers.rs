//! HTTP request handlers for the Demurrage Engine API.
//!
//! This module contains the handler functions for all API endpoints and the
//! router that wires them together.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_demurrage;

use super::request::DemurrageRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Besides the JSON endpoints, `/` serves `index.html` and `/static` serves
/// files from the state's static directory.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.static_dir().to_path_buf();

    Router::new()
        .route("/health", get(health_handler))
        .route("/calculate-demurrage", post(calculate_handler))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handler for POST /calculate-demurrage.
///
/// Validates the request, prices it against the shared tariff and returns
/// the charge with its breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<DemurrageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing demurrage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let days = match request.validated_days(state.day_policy()) {
        Ok(days) => days,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                days = request.days,
                error = %err,
                "Rejected day count"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let result = calculate_demurrage(
        request.container_type,
        request.container_size,
        days,
        state.tariff(),
    );
    info!(
        correlation_id = %correlation_id,
        container_type = %result.container_type,
        container_size = %result.container_size,
        days = result.days,
        total_charge = %result.total_charge,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (StatusCode::OK, Json(result)).into_response()
}
