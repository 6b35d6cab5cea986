use anyhow::{bail, Result};
use schemaver_core::{ValidationOutcome, VersionManager};
use std::path::PathBuf;

use crate::input::read_record;

/// Validate a record and print the outcome as JSON.
///
/// Fails (non-zero exit) when the record is invalid, its version tag is
/// malformed, or the version is unknown.
pub fn run_validate(
    manager: &VersionManager,
    file: Option<PathBuf>,
    version: Option<u32>,
    pretty: bool,
) -> Result<()> {
    let record = read_record(file.as_deref())?;
    let outcome = manager.validate_schema(&record, version);

    println!("{}", super::to_json(&outcome, pretty)?);

    match outcome {
        ValidationOutcome::UnsupportedVersion { version } => {
            bail!("Schema version {} is not supported", version)
        }
        ValidationOutcome::InvalidVersionTag { tag } => {
            bail!("Record has a malformed schema_version tag: {}", tag)
        }
        ValidationOutcome::Checked(report) if !report.valid => {
            bail!(
                "Record does not match schema version {} ({} error(s))",
                report.version,
                report.errors.len()
            )
        }
        ValidationOutcome::Checked(_) => Ok(()),
    }
}
