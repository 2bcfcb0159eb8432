//! Throwaway upstream servers for tests.

use std::net::SocketAddr;

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub const SAMPLE_CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar//EN\r\n\
BEGIN:VEVENT\r\n\
UID:lunch@example.com\r\n\
DTSTART:20240115T120000Z\r\n\
SUMMARY:Lunch\\, Meeting\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:retro@example.com\r\n\
SUMMARY:Retro\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Start an upstream server on an ephemeral port.
///
/// - `/calendar.ics` serves [`SAMPLE_CALENDAR`]
/// - `/missing.ics` answers 404, `/unavailable.ics` answers 503
/// - `/moved` answers 302 without a location
/// - `/not-a-calendar` serves an HTML page
/// - `/user-agent` echoes the request's User-Agent
pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route(
            "/calendar.ics",
            get(|| async { ([(header::CONTENT_TYPE, "text/calendar")], SAMPLE_CALENDAR) }),
        )
        .route("/missing.ics", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/unavailable.ics",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        )
        .route("/moved", get(|| async { StatusCode::FOUND }))
        .route(
            "/not-a-calendar",
            get(|| async { "<html><body>hello</body></html>" }),
        )
        .route(
            "/user-agent",
            get(|headers: HeaderMap| async move {
                headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// An address nothing is listening on.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
