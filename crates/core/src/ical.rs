//! [`CalendarParser`] backed by the `icalendar` crate.
//!
//! The crate's low-level parser does the RFC 5545 work (line unfolding,
//! content lines, nesting). This module only maps its output into the
//! [`ParsedCalendar`] model and decides which values are temporal.

use icalendar::parser::{self, read_calendar, unfold};

use crate::calendar::{Component, ParsedCalendar, Property, PropertyValue, TemporalValue};
use crate::source::{CalendarParser, ParseError};

/// Name given to the root object.
pub const CALENDAR_NAME: &str = "VCALENDAR";

/// Properties whose values carry date/time semantics.
const TEMPORAL_PROPERTIES: &[&str] = &[
    "DTSTART",
    "DTEND",
    "DUE",
    "RECURRENCE-ID",
    "DTSTAMP",
    "CREATED",
    "LAST-MODIFIED",
    "COMPLETED",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct IcalendarParser;

impl CalendarParser for IcalendarParser {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedCalendar, ParseError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)?;
        parse_str(text)
    }
}

/// Parses calendar text into a [`ParsedCalendar`].
pub fn parse_str(text: &str) -> Result<ParsedCalendar, ParseError> {
    let unfolded = unfold(text);
    let parsed = read_calendar(&unfolded).map_err(ParseError::Syntax)?;

    let mut calendar = ParsedCalendar::new(CALENDAR_NAME);
    for component in &parsed.components {
        if component.name.as_str().eq_ignore_ascii_case(CALENDAR_NAME) {
            calendar
                .properties
                .extend(component.properties.iter().map(convert_property));
            calendar
                .subcomponents
                .extend(component.components.iter().map(convert_component));
        } else {
            // Bare components without a VCALENDAR wrapper.
            calendar.subcomponents.push(convert_component(component));
        }
    }

    if calendar.properties.is_empty() && calendar.subcomponents.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(calendar)
}

fn convert_component(component: &parser::Component<'_>) -> Component {
    Component {
        name: component.name.as_str().to_ascii_uppercase(),
        properties: component.properties.iter().map(convert_property).collect(),
    }
}

fn convert_property(property: &parser::Property<'_>) -> Property {
    let name = property.name.as_str().to_ascii_uppercase();
    let raw = property.val.as_str();

    let value = if is_temporal(&name, property) {
        let tzid = parameter(property, "TZID");
        match TemporalValue::parse(raw, tzid) {
            Some(temporal) => PropertyValue::Temporal(temporal),
            None => {
                tracing::debug!(property = %name, value = raw, "Keeping unparsable date as text");
                PropertyValue::text(raw)
            }
        }
    } else {
        PropertyValue::text(raw)
    };

    Property { name, value }
}

fn is_temporal(name: &str, property: &parser::Property<'_>) -> bool {
    let declared_temporal = parameter(property, "VALUE")
        .map(|kind| kind.eq_ignore_ascii_case("DATE") || kind.eq_ignore_ascii_case("DATE-TIME"));

    match declared_temporal {
        // TRIGGER is a duration unless VALUE says otherwise
        Some(true) => TEMPORAL_PROPERTIES.contains(&name) || name == "TRIGGER",
        Some(false) => false,
        None => TEMPORAL_PROPERTIES.contains(&name),
    }
}

fn parameter<'p>(property: &'p parser::Property<'_>, key: &str) -> Option<&'p str> {
    property
        .params
        .iter()
        .find(|param| param.key.as_str().eq_ignore_ascii_case(key))
        .and_then(|param| param.val.as_ref())
        .map(|val| val.as_str().trim_matches('"'))
}
