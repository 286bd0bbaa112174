//! Plan command implementation

use anyhow::{Context, Result};
use pyvercel_core::{BuildConfig, BuildPlan};

/// Print the resolved lambda build plan as JSON
pub fn plan(entrypoint: &str, config: Option<&str>) -> Result<()> {
    let config = match config {
        Some(path) => BuildConfig::load(path)
            .with_context(|| format!("Failed to load build config: {}", path))?,
        None => BuildConfig::default(),
    };

    let plan = BuildPlan::new(entrypoint, &config)
        .with_context(|| format!("Failed to plan build for {}", entrypoint))?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
