use anyhow::Result;
use schemaver_core::{Record, VersionManager};

/// Walk through validating, upgrading and re-validating a legacy record.
pub fn run_demo(manager: &VersionManager) -> Result<()> {
    let legacy = Record::new()
        .with("id", "123")
        .with("name", "Juan Pérez")
        .with("created_at", "2024-01-01T10:00:00");

    let validation = manager.validate_schema(&legacy, None);
    println!("Record valid: {}", validation.is_valid());
    if !validation.is_valid() {
        for error in validation.errors() {
            println!("  - {}", error);
        }
    }

    let from = legacy.version()?;
    let upgraded = manager.upgrade_data(legacy, 3);
    let to = upgraded.version()?;
    println!("Record upgraded to version: {}", to);

    let validation = manager.validate_schema(&upgraded, None);
    println!("Upgraded record valid: {}", validation.is_valid());

    println!("\nMigration scripts:");
    for script in manager.migration_plan(from, to) {
        println!("{}", script);
    }

    Ok(())
}
