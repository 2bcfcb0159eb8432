use axum::{
    http::{Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        convert::convert_calendar,
        health::livez,
        index::{favicon, index},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Calendars are read cross-origin by browser widgets
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let request_timeout = state.config.request_timeout();

    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
        .route("/livez", get(livez))
        .route("/{*url}", get(convert_calendar))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
