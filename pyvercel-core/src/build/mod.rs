//! Lambda build planning
//!
//! Resolves everything the builder decides before it touches the filesystem:
//! which Python runtime to target, which WSGI callable the lambda handler
//! wraps, and which files are left out of the bundle.

mod runtime;

pub use runtime::{resolve_runtime, validate_runtime, DEFAULT_PYTHON_RUNTIME, SUPPORTED_RUNTIMES};

use crate::error::{BuildError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Entry point of the shipped `lambda` package
pub const LAMBDA_HANDLER: &str = "lambda.vercel_handler";

/// Upper bound on the bundle size accepted by the platform
pub const MAX_LAMBDA_SIZE: &str = "15mb";

/// WSGI callable looked up in the entrypoint module by default
pub const DEFAULT_WSGI_APPLICATION_NAME: &str = "application";

/// Files left out of the bundle by default
pub const DEFAULT_EXCLUDE_FILES: &str = "node_modules/**";

/// User-supplied build configuration (camelCase keys, all optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub runtime: Option<String>,
    pub wsgi_application_name: Option<String>,

    /// Anything other than a JSON string falls back to the default glob
    #[serde(default, deserialize_with = "string_or_none")]
    pub exclude_files: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Treat an empty string the same as an absent value
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl BuildConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()).into())
    }

    /// Read a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            BuildError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }
}

/// Fully resolved description of the lambda to produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub entrypoint: String,
    pub runtime: String,
    pub wsgi_application: String,
    pub handler: String,
    pub exclude_files: String,
    pub max_lambda_size: String,
    pub environment: BTreeMap<String, String>,
}

impl BuildPlan {
    /// Resolve a plan for `entrypoint` under `config`
    pub fn new(entrypoint: &str, config: &BuildConfig) -> Result<Self> {
        let runtime = resolve_runtime(config.runtime.as_deref())?;
        tracing::info!("Lambda runtime: {}", runtime);

        let name = non_empty(config.wsgi_application_name.as_deref())
            .unwrap_or(DEFAULT_WSGI_APPLICATION_NAME);
        let wsgi_application = wsgi_application(entrypoint, name)?;
        tracing::info!("WSGI application: {}", wsgi_application);

        Ok(Self {
            entrypoint: entrypoint.to_string(),
            runtime,
            wsgi_application,
            handler: LAMBDA_HANDLER.to_string(),
            exclude_files: config
                .exclude_files
                .clone()
                .unwrap_or_else(|| DEFAULT_EXCLUDE_FILES.to_string()),
            max_lambda_size: MAX_LAMBDA_SIZE.to_string(),
            environment: BTreeMap::new(),
        })
    }
}

/// Dotted path of the WSGI callable for an entrypoint file
///
/// `example/wsgi.py` with `application` becomes `example.wsgi.application`.
/// Everything after the first `.` in the entrypoint is dropped.
pub fn wsgi_application(entrypoint: &str, name: &str) -> Result<String> {
    let module = entrypoint.split('.').next().unwrap_or_default();
    if module.is_empty() {
        return Err(BuildError::InvalidEntrypoint(entrypoint.to_string()).into());
    }
    if name.is_empty() {
        return Err(BuildError::InvalidConfig("wsgiApplicationName is empty".to_string()).into());
    }
    Ok(format!("{}.{}", module.replace('/', "."), name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PyVercelError;

    #[test]
    fn test_wsgi_application_from_nested_path() {
        assert_eq!(
            wsgi_application("example/wsgi.py", "application").unwrap(),
            "example.wsgi.application"
        );
    }

    #[test]
    fn test_wsgi_application_drops_after_first_dot() {
        assert_eq!(
            wsgi_application("app/main.prod.py", "app").unwrap(),
            "app.main.app"
        );
    }

    #[test]
    fn test_wsgi_application_rejects_empty_module() {
        assert!(matches!(
            wsgi_application(".py", "application"),
            Err(PyVercelError::Build(BuildError::InvalidEntrypoint(_)))
        ));
        assert!(wsgi_application("", "application").is_err());
    }

    #[test]
    fn test_plan_defaults() {
        let plan = BuildPlan::new("example/wsgi.py", &BuildConfig::default()).unwrap();
        assert_eq!(plan.runtime, DEFAULT_PYTHON_RUNTIME);
        assert_eq!(plan.wsgi_application, "example.wsgi.application");
        assert_eq!(plan.handler, "lambda.vercel_handler");
        assert_eq!(plan.exclude_files, "node_modules/**");
        assert_eq!(plan.max_lambda_size, "15mb");
        assert!(plan.environment.is_empty());
    }

    #[test]
    fn test_plan_with_config() {
        let config = BuildConfig::from_json(
            r#"{"runtime": "python3.8", "wsgiApplicationName": "app", "excludeFiles": "tests/**"}"#,
        )
        .unwrap();
        let plan = BuildPlan::new("api/index.py", &config).unwrap();
        assert_eq!(plan.runtime, "python3.8");
        assert_eq!(plan.wsgi_application, "api.index.app");
        assert_eq!(plan.exclude_files, "tests/**");
    }

    #[test]
    fn test_plan_rejects_unsupported_runtime() {
        let config = BuildConfig {
            runtime: Some("nodejs14.x".to_string()),
            ..Default::default()
        };
        let err = BuildPlan::new("api/index.py", &config).unwrap_err();
        assert!(err.to_string().contains("nodejs14.x"));
    }

    #[test]
    fn test_plan_empty_strings_use_defaults() {
        let config =
            BuildConfig::from_json(r#"{"runtime": "", "wsgiApplicationName": ""}"#).unwrap();
        let plan = BuildPlan::new("example/wsgi.py", &config).unwrap();
        assert_eq!(plan.runtime, "python3.9");
        assert_eq!(plan.wsgi_application, "example.wsgi.application");
    }

    #[test]
    fn test_non_string_exclude_files_uses_default() {
        for json in [
            r#"{"excludeFiles": ["a/**"]}"#,
            r#"{"excludeFiles": 7}"#,
            r#"{"excludeFiles": null}"#,
        ] {
            let config = BuildConfig::from_json(json).unwrap();
            assert_eq!(config.exclude_files, None);
            let plan = BuildPlan::new("example/wsgi.py", &config).unwrap();
            assert_eq!(plan.exclude_files, "node_modules/**");
        }
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        let err = BuildConfig::from_json(r#"{"runtime": 39}"#).unwrap_err();
        assert!(matches!(
            err,
            PyVercelError::Build(BuildError::InvalidConfig(_))
        ));
    }
}
