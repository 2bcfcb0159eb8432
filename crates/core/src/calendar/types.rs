use serde_json::Value;

use super::value::{TemporalValue, TextValue};

/// A calendar document after parsing, ready to be transformed.
///
/// Built once per request by a [`crate::CalendarParser`] and consumed by
/// [`crate::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCalendar {
    /// Name of the root object, usually `VCALENDAR`.
    pub name: String,
    /// The calendar's own properties in source order.
    pub properties: Vec<Property>,
    /// Direct sub-components in source order.
    pub subcomponents: Vec<Component>,
}

impl ParsedCalendar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            subcomponents: Vec::new(),
        }
    }

    /// Builder-style helper to add a calendar property.
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    /// Builder-style helper to add a sub-component.
    pub fn with_component(mut self, component: Component) -> Self {
        self.subcomponents.push(component);
        self
    }
}

/// A named record inside a calendar, e.g. a `VEVENT` or `VTODO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub properties: Vec<Property>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Builder-style helper to add a property.
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }
}

/// One `NAME:value` line. Names may repeat within a property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The value of a property, classified by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A value carrying date/time semantics.
    Temporal(TemporalValue),
    /// A value kept as its raw, possibly escaped text.
    Textual(TextValue),
}

impl PropertyValue {
    /// Shorthand for a textual value from its raw encoded form.
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Textual(TextValue::new(raw))
    }

    /// The native JSON rendering used for calendar-level properties.
    ///
    /// Temporal values become ISO-8601 strings and textual values are fully
    /// unescaped.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Temporal(temporal) => Value::String(temporal.to_iso8601()),
            Self::Textual(text) => Value::String(text.decoded()),
        }
    }
}

impl From<TemporalValue> for PropertyValue {
    fn from(value: TemporalValue) -> Self {
        Self::Temporal(value)
    }
}

impl From<TextValue> for PropertyValue {
    fn from(value: TextValue) -> Self {
        Self::Textual(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_textual_to_json_is_fully_unescaped() {
        let value = PropertyValue::text(r"Team\, Inc\; line one\nline two");
        assert_eq!(
            value.to_json(),
            Value::String("Team, Inc; line one\nline two".to_string())
        );
    }

    #[test]
    fn test_temporal_to_json_is_iso_string() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let value = PropertyValue::from(TemporalValue::Date(date));
        assert_eq!(value.to_json(), Value::String("2024-03-01".to_string()));
    }

    #[test]
    fn test_builders_keep_source_order() {
        let calendar = ParsedCalendar::new("VCALENDAR")
            .with_property("VERSION", PropertyValue::text("2.0"))
            .with_property("PRODID", PropertyValue::text("-//Test//EN"))
            .with_component(Component::new("VEVENT"))
            .with_component(Component::new("VTODO"));

        let names: Vec<&str> = calendar.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["VERSION", "PRODID"]);

        let kinds: Vec<&str> = calendar
            .subcomponents
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(kinds, vec!["VEVENT", "VTODO"]);
    }
}
