use serde_json::{Map, Value};

/// The object stored under the calendar name.
///
/// Holds flat calendar properties and the per-kind component lists side by
/// side in one JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarObject {
    fields: Map<String, Value>,
}

impl CalendarObject {
    /// Stores a calendar property. A later property with the same name wins.
    pub fn insert_property(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    /// Appends `item` to the list stored under `key`.
    ///
    /// The first append for a key creates the list, replacing any non-list
    /// value already stored there. Later appends keep insertion order.
    pub fn grouped_append(&mut self, key: &str, item: Value) {
        match self.fields.get_mut(key) {
            Some(Value::Array(items)) => items.push(item),
            _ => {
                self.fields.insert(key.to_string(), Value::Array(vec![item]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
