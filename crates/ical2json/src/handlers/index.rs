use axum::{http::StatusCode, response::Html};

const USAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>ical2json</title></head>
<body>
<p>Append the address of an iCalendar file to this server's address, e.g.
<code>/http://www.example.com/path/to/file.ics</code>. The <code>http://</code>
prefix is optional.</p>
<p>Add <code>?callback=name</code> to receive the result as JSONP.</p>
</body>
</html>
"#;

/// Usage page (GET /).
pub async fn index() -> Html<&'static str> {
    Html(USAGE)
}

/// Browsers probe for this on every page load (GET /favicon.ico).
pub async fn favicon() -> StatusCode {
    StatusCode::NOT_FOUND
}
