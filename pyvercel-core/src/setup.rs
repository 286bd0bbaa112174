//! Packaging declaration for the Python distribution

use crate::error::Result;
use crate::manifest::PackageManifest;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distribution name on the package index
pub const PACKAGE_NAME: &str = "py-vercel";

/// Python packages shipped in the distribution
pub const PACKAGES: [&str; 1] = ["lambda"];

/// Runtime requirements, deliberately unpinned
pub const INSTALL_REQUIRES: [&str; 2] = ["Werkzeug", "py-exceptions"];

/// Static record consumed by the packaging tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    pub name: String,
    pub version: String,
    pub packages: Vec<String>,
    pub install_requires: Vec<String>,
}

impl PackageDeclaration {
    /// Build the declaration. Only the version comes from the manifest.
    pub fn from_manifest(manifest: &PackageManifest) -> Self {
        Self {
            name: PACKAGE_NAME.to_string(),
            version: manifest.version.clone(),
            packages: PACKAGES.iter().map(|p| p.to_string()).collect(),
            install_requires: INSTALL_REQUIRES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Load a manifest file and build the declaration from it
    pub fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        let manifest = PackageManifest::load(path)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a declarative setuptools `setup.cfg`
    pub fn to_setup_cfg(&self) -> String {
        format!(
            "[metadata]\nname = {}\nversion = {}\n\n[options]\n{}{}",
            self.name,
            self.version,
            cfg_list("packages", &self.packages),
            cfg_list("install_requires", &self.install_requires),
        )
    }
}

fn cfg_list(key: &str, values: &[String]) -> String {
    let mut out = format!("{} =\n", key);
    for value in values {
        out.push_str("    ");
        out.push_str(value);
        out.push('\n');
    }
    out
}
