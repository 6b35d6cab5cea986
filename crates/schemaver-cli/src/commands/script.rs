use anyhow::Result;
use schemaver_core::VersionManager;

/// Print the migration script for `from → to`, or every hop when `plan` is set.
pub fn show_script(manager: &VersionManager, from: u32, to: u32, plan: bool) -> Result<()> {
    if plan {
        let scripts = manager.migration_plan(from, to);
        if scripts.is_empty() {
            log::warn!("Nothing to migrate from {} to {}", from, to);
        }
        for script in scripts {
            println!("{}", script);
        }
    } else {
        println!("{}", manager.create_migration_script(from, to));
    }
    Ok(())
}
