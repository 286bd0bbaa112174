//! Setup command implementation

use crate::DeclarationFormat;
use anyhow::{Context, Result};
use pyvercel_core::PackageDeclaration;
use std::path::Path;

/// Build the packaging declaration from a manifest and print or write it
pub fn setup(manifest: &str, format: DeclarationFormat, output: Option<&str>) -> Result<()> {
    let declaration = PackageDeclaration::from_manifest_path(Path::new(manifest))
        .with_context(|| format!("Failed to build packaging declaration from {}", manifest))?;

    tracing::info!(
        name = %declaration.name,
        version = %declaration.version,
        "Packaging declaration ready"
    );

    let rendered = match format {
        DeclarationFormat::Json => {
            let mut json = declaration.to_json()?;
            json.push('\n');
            json
        }
        DeclarationFormat::Cfg => declaration.to_setup_cfg(),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            tracing::info!("Wrote {}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
