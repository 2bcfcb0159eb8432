//! Functional core for ical2json.
//!
//! Everything in here is pure or trait-based: the calendar model, the
//! icalendar parser adapter, the JSON transform and the error taxonomy.
//! Network access lives behind [`source::CalendarFetcher`] and is provided
//! by the server crate.

pub mod calendar;
pub mod ical;
pub mod jsonp;
pub mod source;
pub mod transform;

pub use calendar::{Component, ParsedCalendar, Property, PropertyValue, TemporalValue, TextValue};
pub use ical::IcalendarParser;
pub use source::{convert, CalendarFetcher, CalendarParser, ConvertError};
pub use transform::{transform, CalendarJson};
