//! HTTP API module for the Demurrage Engine.
//!
//! This module provides the REST endpoints for calculating demurrage
//! charges, a health check, and the static front page.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::DemurrageRequest;
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::{AppState, DEFAULT_STATIC_DIR};
