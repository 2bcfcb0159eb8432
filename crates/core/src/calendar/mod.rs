mod types;
mod value;

pub use types::{Component, ParsedCalendar, Property, PropertyValue};
pub use value::{TemporalValue, TextValue};
