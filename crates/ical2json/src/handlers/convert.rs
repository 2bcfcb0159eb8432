use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use ical2json_core::{convert, jsonp, source::normalize_source_url};

use crate::{handlers::AppError, state::AppState};

const JSON_CONTENT_TYPE: &str = "application/json";
const JSONP_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

/// Query parameters accepted by the conversion endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    /// Wrap the JSON as `callback(<json>);` when present.
    pub callback: Option<String>,
}

/// Convert a remote calendar to JSON (GET /{*url}).
pub async fn convert_calendar(
    State(state): State<AppState>,
    Path(url): Path<String>,
    Query(query): Query<ConvertQuery>,
) -> Result<Response, AppError> {
    if let Some(callback) = &query.callback {
        if state.config.strict_jsonp_callback && !jsonp::is_safe_callback(callback) {
            tracing::warn!(callback = %callback, "Rejected JSONP callback name");
            return Ok((StatusCode::BAD_REQUEST, "Invalid callback name").into_response());
        }
    }

    let source_url = normalize_source_url(&url);
    tracing::info!(url = %source_url, jsonp = query.callback.is_some(), "Converting calendar");

    let calendar = convert(state.fetcher.as_ref(), state.parser.as_ref(), &source_url).await?;
    let json = serde_json::to_string(&calendar)?;

    let response = match query.callback {
        Some(callback) => (
            [(header::CONTENT_TYPE, JSONP_CONTENT_TYPE)],
            jsonp::wrap(&callback, &json),
        )
            .into_response(),
        None => ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], json).into_response(),
    };

    Ok(response)
}
