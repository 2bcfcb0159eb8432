mod error;
mod http_mapping;
mod traits;
mod url;

pub use error::{ConvertError, FetchError, ParseError, Result};
pub use http_mapping::{convert_error_to_status_code, upstream_status_to_status_code};
pub use traits::{convert, CalendarFetcher, CalendarParser};
pub use url::normalize_source_url;
