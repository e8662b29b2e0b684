use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, settings: &ApplicationSettings) -> Router<()> {
    Router::new()
        .route("/", get(|| async { "Daily planner API" }))
        .nest("/api", routes::router())
        .with_state(app_state)
        .layer(cors_layer(&settings.cors_allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed_origins = allowed_origins.to_vec();
    cors.allow_origin(AllowOrigin::predicate(move |origin, _| {
        let origin_str = origin.to_str().unwrap_or_default();
        allowed_origins
            .iter()
            .any(|allowed| allowed.trim_end_matches('/') == origin_str)
    }))
}
