pub(crate) mod analyze;
pub(crate) mod error;
pub(crate) mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;

pub(crate) use error::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/analyze", post(analyze::analyze))
}
