//! Example application views

use axum::http::StatusCode;

/// Fixed body served by [`hello_world`]
pub const HELLO_BODY: &str = "Hello world!";

/// Always answers `200 OK` with [`HELLO_BODY`]; the request is ignored
pub async fn hello_world() -> (StatusCode, &'static str) {
    (StatusCode::OK, HELLO_BODY)
}
