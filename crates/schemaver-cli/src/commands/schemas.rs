use anyhow::{Context, Result};
use schemaver_core::VersionManager;

/// Dump the schema registry, or a single revision, as JSON.
pub fn show_schemas(manager: &VersionManager, version: Option<u32>, pretty: bool) -> Result<()> {
    let json = match version {
        Some(version) => {
            let revision = manager
                .schemas()
                .get(version)
                .with_context(|| format!("Schema version {} is not supported", version))?;
            super::to_json(revision, pretty)?
        }
        None => super::to_json(manager.schemas(), pretty)?,
    };
    println!("{}", json);
    Ok(())
}
