//! Python runtime selection

use crate::error::BuildError;

/// Runtime used when the build config does not name one
pub const DEFAULT_PYTHON_RUNTIME: &str = "python3.9";

/// Lambda runtimes the builder knows how to target
pub const SUPPORTED_RUNTIMES: [&str; 4] = ["python3.6", "python3.7", "python3.8", "python3.9"];

/// Resolve the configured runtime, falling back to the default when it is
/// absent or empty
pub fn resolve_runtime(configured: Option<&str>) -> Result<String, BuildError> {
    let runtime = configured
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_PYTHON_RUNTIME);
    validate_runtime(runtime)?;
    Ok(runtime.to_string())
}

/// Reject runtimes outside [`SUPPORTED_RUNTIMES`]
pub fn validate_runtime(runtime: &str) -> Result<(), BuildError> {
    if SUPPORTED_RUNTIMES.contains(&runtime) {
        Ok(())
    } else {
        Err(BuildError::UnsupportedRuntime(runtime.to_string()))
    }
}
