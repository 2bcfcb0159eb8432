/// Turns the path-embedded source reference into an absolute URL.
///
/// Anything that does not already start with `http://` or `https://` is
/// treated as a plain-HTTP location.
pub fn normalize_source_url(path: &str) -> String {
    let path = path.trim_start_matches('/');
    let lower = path.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        path.to_string()
    } else {
        format!("http://{path}")
    }
}
