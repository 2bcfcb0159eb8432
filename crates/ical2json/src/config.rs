use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timeout for fetching a source calendar, in seconds (default: 30)
    pub fetch_timeout_seconds: u64,
    /// Timeout for a whole inbound request, in seconds (default: 60)
    pub request_timeout_seconds: u64,
    /// User-Agent sent to source servers (default: "ical2json/<version>")
    pub user_agent: String,
    /// Reject JSONP callbacks that are not plain identifiers (default: false)
    pub strict_jsonp_callback: bool,
    /// Emit logs as JSON lines instead of human-readable text (default: false)
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FETCH_TIMEOUT_SECONDS` - Source fetch timeout (default: 30)
    /// - `REQUEST_TIMEOUT_SECONDS` - Inbound request timeout (default: 60)
    /// - `USER_AGENT` - User-Agent for source requests
    /// - `STRICT_JSONP_CALLBACK` - Validate callback names (default: false)
    /// - `LOG_FORMAT` - `json` for JSON logs, anything else for text
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            fetch_timeout_seconds: lookup("FETCH_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            user_agent: lookup("USER_AGENT").unwrap_or_else(default_user_agent),
            strict_jsonp_callback: lookup("STRICT_JSONP_CALLBACK")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Get the fetch timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_user_agent() -> String {
    format!("ical2json/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
