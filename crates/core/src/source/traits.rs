use async_trait::async_trait;

use crate::calendar::ParsedCalendar;
use crate::transform::{transform, CalendarJson};

use super::{FetchError, ParseError, Result};

/// Retrieves the raw bytes of a calendar document.
#[async_trait]
pub trait CalendarFetcher: Send + Sync {
    /// Fetches the document at `url`.
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Turns raw calendar bytes into a [`ParsedCalendar`].
pub trait CalendarParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> std::result::Result<ParsedCalendar, ParseError>;
}

/// Fetches, parses and transforms the calendar at `url`.
///
/// Failures are returned as-is; nothing is retried or cached.
pub async fn convert(
    fetcher: &dyn CalendarFetcher,
    parser: &dyn CalendarParser,
    url: &str,
) -> Result<CalendarJson> {
    let bytes = fetcher.fetch(url).await?;
    tracing::debug!(url, bytes = bytes.len(), "Fetched calendar");

    let calendar = parser.parse(&bytes)?;
    tracing::debug!(
        url,
        name = %calendar.name,
        components = calendar.subcomponents.len(),
        "Parsed calendar"
    );

    Ok(transform(&calendar)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Component, PropertyValue};
    use crate::source::ConvertError;
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticFetcher {
        response: std::result::Result<Vec<u8>, FetchError>,
        requested: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        fn new(response: std::result::Result<Vec<u8>, FetchError>) -> Self {
            Self {
                response,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CalendarFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.response.clone()
        }
    }

    /// Parses `SUMMARY=<text>` lines into VEVENTs.
    struct LineParser;

    impl CalendarParser for LineParser {
        fn parse(&self, bytes: &[u8]) -> std::result::Result<ParsedCalendar, ParseError> {
            let text = std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)?;
            if text.is_empty() {
                return Err(ParseError::Empty);
            }
            let mut calendar = ParsedCalendar::new("VCALENDAR");
            for line in text.lines() {
                let summary = line
                    .strip_prefix("SUMMARY=")
                    .ok_or_else(|| ParseError::Syntax(line.to_string()))?;
                calendar = calendar.with_component(
                    Component::new("VEVENT").with_property("SUMMARY", PropertyValue::text(summary)),
                );
            }
            Ok(calendar)
        }
    }

    #[tokio::test]
    async fn test_convert_runs_the_pipeline() {
        let fetcher = StaticFetcher::new(Ok(b"SUMMARY=a\\, b\nSUMMARY=c".to_vec()));

        let output = convert(&fetcher, &LineParser, "http://example.com/cal.ics")
            .await
            .unwrap();

        assert_eq!(
            output.into_value(),
            json!({"VCALENDAR": {"VEVENT": [{"SUMMARY": "a, b"}, {"SUMMARY": "c"}]}})
        );
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            vec!["http://example.com/cal.ics".to_string()]
        );
    }

    #[tokio::test]
    async fn test_convert_propagates_fetch_errors() {
        let fetcher = StaticFetcher::new(Err(FetchError::UpstreamStatus { status: Some(404) }));

        let error = convert(&fetcher, &LineParser, "http://example.com/missing.ics")
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ConvertError::Fetch(FetchError::UpstreamStatus { status: Some(404) })
        );
    }

    #[tokio::test]
    async fn test_convert_propagates_parse_errors() {
        let fetcher = StaticFetcher::new(Ok(b"garbage".to_vec()));

        let error = convert(&fetcher, &LineParser, "http://example.com/cal.ics")
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ConvertError::Parse(ParseError::Syntax("garbage".to_string()))
        );
    }
}
