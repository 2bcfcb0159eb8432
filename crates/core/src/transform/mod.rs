mod error;
mod grouping;

pub use error::TransformError;
pub use grouping::CalendarObject;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::calendar::{Component, ParsedCalendar, PropertyValue};

/// The JSON tree produced from a calendar.
///
/// A single top-level key (the calendar name) maps to an object holding the
/// calendar's own properties plus one list per component kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CalendarJson(Map<String, Value>);

impl CalendarJson {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Transforms a parsed calendar into its JSON tree.
///
/// Calendar-level properties are copied in as their native values.
/// Component-level properties follow a narrower policy: textual values are
/// stored with escaped commas restored, temporal values are rendered to
/// ISO-8601 and then dropped.
pub fn transform(calendar: &ParsedCalendar) -> Result<CalendarJson, TransformError> {
    if calendar.name.is_empty() {
        return Err(TransformError::MissingName { kind: "calendar" });
    }

    let mut object = CalendarObject::default();
    for property in &calendar.properties {
        object.insert_property(&property.name, property.value.to_json());
    }

    for component in &calendar.subcomponents {
        if component.name.is_empty() {
            return Err(TransformError::MissingName { kind: "component" });
        }
        object.grouped_append(&component.name, component_object(component));
    }

    let mut root = Map::new();
    root.insert(calendar.name.clone(), object.into_value());
    Ok(CalendarJson(root))
}

fn component_object(component: &Component) -> Value {
    let mut fields = Map::new();

    for property in &component.properties {
        match &property.value {
            PropertyValue::Temporal(temporal) => {
                // Rendered but not stored; only textual values reach the output.
                let _iso = temporal.to_iso8601();
            }
            PropertyValue::Textual(text) => {
                fields.insert(property.name.clone(), Value::String(text.unescape_commas()));
            }
        }
    }

    Value::Object(fields)
}
