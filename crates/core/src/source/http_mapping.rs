//! Pure functions for mapping conversion errors to HTTP status codes.
//!
//! The status codes follow the error taxonomy of the service:
//!
//! - source answered 4xx/5xx -> the same status
//! - source answered anything else, or no status -> 500
//! - source unreachable or URL unusable -> 502
//! - body, parse and transform failures -> 500

use super::{ConvertError, FetchError};

/// Maps an upstream HTTP status to the status returned to the caller.
///
/// # Examples
///
/// ```
/// use ical2json_core::source::upstream_status_to_status_code;
///
/// assert_eq!(upstream_status_to_status_code(Some(404)), 404);
/// assert_eq!(upstream_status_to_status_code(Some(302)), 500);
/// assert_eq!(upstream_status_to_status_code(None), 500);
/// ```
pub fn upstream_status_to_status_code(status: Option<u16>) -> u16 {
    match status {
        Some(code) if (400..600).contains(&code) => code,
        _ => 500,
    }
}

/// Maps a [`ConvertError`] to an HTTP status code.
pub fn convert_error_to_status_code(error: &ConvertError) -> u16 {
    match error {
        ConvertError::Fetch(FetchError::UpstreamStatus { status }) => {
            upstream_status_to_status_code(*status)
        }
        ConvertError::Fetch(FetchError::Unreachable(_)) => 502,
        ConvertError::Fetch(FetchError::InvalidUrl(_)) => 502,
        ConvertError::Fetch(FetchError::Body(_)) => 500,
        ConvertError::Parse(_) => 500,
        ConvertError::Transform(_) => 500,
    }
}
