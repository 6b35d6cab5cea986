use anyhow::{Context, Result};
use schemaver_core::{Record, VersionManager};
use std::path::PathBuf;

use crate::input::read_record;

/// Pick the upgrade target: `--to`, else the configured default, else the
/// newest known version.
pub fn resolve_target(
    manager: &VersionManager,
    to: Option<u32>,
    default_target: Option<u32>,
) -> Result<u32> {
    to.or(default_target)
        .or_else(|| manager.schemas().latest())
        .context("No target version given and no schema versions are registered")
}

/// Upgrade `record` to `target`, strictly or with pass-through hops.
///
/// A malformed version tag is an error in both modes.
pub fn upgrade_record(
    manager: &VersionManager,
    record: Record,
    target: u32,
    strict: bool,
) -> Result<Record> {
    let from = record.version().context("Cannot upgrade record")?;

    let upgraded = if strict {
        manager
            .upgrade_data_strict(record, target)
            .with_context(|| format!("Cannot upgrade record from {} to {}", from, target))?
    } else {
        manager.upgrade_data(record, target)
    };

    log::info!("Upgraded record from version {} to {}", from, target.max(from));
    Ok(upgraded)
}

/// Upgrade a record and print the result as JSON.
pub fn run_upgrade(
    manager: &VersionManager,
    file: Option<PathBuf>,
    to: Option<u32>,
    default_target: Option<u32>,
    strict: bool,
    pretty: bool,
) -> Result<()> {
    let record = read_record(file.as_deref())?;
    let target = resolve_target(manager, to, default_target)?;
    let upgraded = upgrade_record(manager, record, target, strict)?;

    println!("{}", super::to_json(&upgraded, pretty)?);
    Ok(())
}
