use thiserror::Error;

use crate::transform::TransformError;

/// Errors raised while retrieving the source document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The source answered with a non-success HTTP status.
    #[error("{}", upstream_status_message(.status))]
    UpstreamStatus { status: Option<u16> },
    /// The source could not be reached (DNS, refused connection, timeout).
    #[error("Could not reach source: {0}")]
    Unreachable(String),
    /// The URL could not be turned into a request.
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),
    /// The response body could not be read.
    #[error("Failed to read source body: {0}")]
    Body(String),
}

fn upstream_status_message(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("Source returned HTTP {code}"),
        None => "Source returned an error without a status".to_string(),
    }
}

/// Errors raised while parsing the calendar text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Calendar is not valid UTF-8")]
    InvalidUtf8,
    #[error("Calendar syntax error: {0}")]
    Syntax(String),
    #[error("Calendar is empty")]
    Empty,
}

/// Any failure of the fetch, parse and transform pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result type for the conversion pipeline.
pub type Result<T> = std::result::Result<T, ConvertError>;
