//! py-vercel Core Library
//!
//! Packaging metadata and lambda build planning for the py-vercel builder.
//! The package version lives in `package.json` so the JavaScript builder and
//! the Python distribution share a single source of truth.

pub mod build;
pub mod error;
pub mod manifest;
pub mod setup;

pub use build::{BuildConfig, BuildPlan};
pub use error::{BuildError, ManifestError, PyVercelError, Result};
pub use manifest::PackageManifest;
pub use setup::PackageDeclaration;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_from_manifest() {
        let manifest = PackageManifest::from_json(r#"{"version": "0.4.0"}"#).unwrap();
        let declaration = PackageDeclaration::from_manifest(&manifest);
        assert_eq!(declaration.name, "py-vercel");
        assert_eq!(declaration.version, "0.4.0");
    }
}
