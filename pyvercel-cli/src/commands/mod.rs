//! CLI command implementations

mod plan;
mod setup;

pub use plan::plan;
pub use setup::setup;
