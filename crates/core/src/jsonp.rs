//! JSONP response wrapping.

/// Wraps a JSON document as a call to `callback`.
///
/// The callback name is inserted verbatim. Callers that accept untrusted
/// names should check them with [`is_safe_callback`] first.
///
/// ```
/// assert_eq!(ical2json_core::jsonp::wrap("cb", "{}"), "cb({});");
/// ```
pub fn wrap(callback: &str, json: &str) -> String {
    let mut body = String::with_capacity(callback.len() + json.len() + 3);
    body.push_str(callback);
    body.push('(');
    body.push_str(json);
    body.push_str(");");
    body
}

/// Returns true when `name` is a dotted JavaScript identifier such as
/// `jQuery123_456` or `app.callbacks.onCalendar`.
pub fn is_safe_callback(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
