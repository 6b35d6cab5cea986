use anyhow::{Context, Result};
use serde::Serialize;

pub mod config;
pub mod demo;
pub mod schemas;
pub mod script;
pub mod upgrade;
pub mod validate;

pub use demo::run_demo;
pub use schemas::show_schemas;
pub use script::show_script;
pub use upgrade::run_upgrade;
pub use validate::run_validate;

/// Render a value as JSON, pretty or compact.
fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize output")
}
