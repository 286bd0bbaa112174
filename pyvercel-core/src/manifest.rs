//! `package.json` reading

use crate::error::{ManifestError, Result};
use serde_json::Value;
use std::path::Path;

/// Default manifest file name, resolved relative to the working directory
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` the packaging step cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    /// Package version, copied verbatim into the Python distribution
    pub version: String,

    /// npm package name, if present
    pub name: Option<String>,
}

impl PackageManifest {
    /// Parse a manifest from JSON text
    ///
    /// The `version` key is required and must be a string. There is no
    /// fallback version.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(ManifestError::MalformedJson)?;
        let object = value.as_object().ok_or(ManifestError::NotAnObject)?;

        let version = match object.get("version") {
            Some(Value::String(version)) => version.clone(),
            Some(other) => {
                return Err(ManifestError::InvalidField {
                    field: "version".to_string(),
                    reason: format!("expected a string, found {}", json_kind(other)),
                }
                .into())
            }
            None => return Err(ManifestError::MissingField("version".to_string()).into()),
        };

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { version, name })
    }

    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), version = %manifest.version, "Loaded manifest");
        Ok(manifest)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
