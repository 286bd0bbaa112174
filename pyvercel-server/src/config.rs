//! Server configuration

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Namespace the example application is mounted under
pub const DEFAULT_APP_PREFIX: &str = "/example_app";

/// Address used when `PYVERCEL_BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Allow localhost origins for development
    Localhost,
    /// Allow any origin
    Any,
    /// Allow an explicit list of origins
    List(Vec<String>),
}

/// Runtime configuration for the example server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Normalized prefix: empty, or a leading `/` with no trailing `/`
    pub app_prefix: String,

    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            app_prefix: DEFAULT_APP_PREFIX.to_string(),
            cors_origins: CorsOrigins::Localhost,
        }
    }
}

impl ServerConfig {
    /// Read configuration from `PYVERCEL_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr =
            lookup("PYVERCEL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid PYVERCEL_BIND_ADDR: {}", bind_addr))?;

        let app_prefix =
            lookup("PYVERCEL_APP_PREFIX").unwrap_or_else(|| DEFAULT_APP_PREFIX.to_string());

        // PYVERCEL_CORS_ORIGINS can be comma-separated list of origins, or "*" for any
        let cors_origins = match lookup("PYVERCEL_CORS_ORIGINS") {
            Some(origins) => parse_cors_origins(&origins),
            None => CorsOrigins::Localhost,
        };

        Ok(Self {
            bind_addr,
            app_prefix: normalize_prefix(&app_prefix),
            cors_origins,
        })
    }

    /// Set the application prefix
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.app_prefix = normalize_prefix(prefix);
        self
    }

    /// Full path of the hello route
    pub fn hello_path(&self) -> String {
        format!("{}/hello", self.app_prefix)
    }
}

/// Normalize a mount prefix to `/segment[/segment...]` or the empty string
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_cors_origins(origins: &str) -> CorsOrigins {
    if origins.trim() == "*" {
        return CorsOrigins::Any;
    }
    CorsOrigins::List(
        origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
