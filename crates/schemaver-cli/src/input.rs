use anyhow::{Context, Result};
use schemaver_core::Record;
use std::io::Read;
use std::path::Path;

/// Read a JSON record from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_record(path: Option<&Path>) -> Result<Record> {
    let text = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record from {}", path.display()))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read record from stdin")?;
            text
        }
    };

    Record::from_json(&text).context("Record is not a JSON object")
}
