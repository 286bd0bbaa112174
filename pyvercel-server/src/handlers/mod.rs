//! Request handlers

mod hello;

pub use hello::*;

use crate::config::ServerConfig;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,

    /// Where the example application's hello route is mounted
    pub hello_path: String,
}

/// Health check endpoint
pub async fn health_check(State(config): State<Arc<ServerConfig>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        hello_path: config.hello_path(),
    })
}
