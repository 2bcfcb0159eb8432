//! Application state shared by all request handlers.

use std::sync::Arc;

use ical2json_core::ical::IcalendarParser;
use ical2json_core::source::{CalendarFetcher, CalendarParser};

use crate::{config::Config, fetcher::HttpFetcher};

/// Shared application state.
///
/// Cloned for each request. Holds the fetch and parse collaborators as
/// trait objects so tests can swap in local implementations. Nothing in
/// here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Retrieves source documents.
    pub fetcher: Arc<dyn CalendarFetcher>,
    /// Parses calendar text.
    pub parser: Arc<dyn CalendarParser>,
    pub config: Config,
}

impl AppState {
    /// Create state with the HTTP fetcher and the icalendar parser.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;

        Ok(Self {
            fetcher: Arc::new(fetcher),
            parser: Arc::new(IcalendarParser),
            config,
        })
    }

    /// Replace the fetcher.
    #[cfg(test)]
    pub fn with_fetcher(mut self, fetcher: impl CalendarFetcher + 'static) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }
}
