use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ical2json_core::source::{convert_error_to_status_code, ConvertError};

/// Application error type that wraps `anyhow::Error`.
///
/// Conversion failures carry their own status code; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.downcast_ref::<ConvertError>() {
            Some(error) => StatusCode::from_u16(convert_error_to_status_code(error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Failed to convert calendar");
        } else {
            tracing::warn!(error = %self.0, status = status_code.as_u16(), "Source request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ical2json_core::source::{FetchError, ParseError};

    #[test]
    fn test_upstream_status_is_forwarded() {
        let error = AppError::from(ConvertError::from(FetchError::UpstreamStatus {
            status: Some(410),
        }));
        assert_eq!(error.status_code(), StatusCode::GONE);
    }

    #[test]
    fn test_unreachable_is_bad_gateway() {
        let error = AppError::from(ConvertError::from(FetchError::Unreachable(
            "connection refused".to_string(),
        )));
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_parse_failure_is_internal_error() {
        let error = AppError::from(ConvertError::from(ParseError::Empty));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_other_errors_are_internal_errors() {
        let error = AppError::from(anyhow::anyhow!("serializer exploded"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
