use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  log_level: {}", config.log_level);
    println!("  coloured: {}", config.coloured);
    println!("  pretty: {}", config.pretty);
    println!(
        "  default_target: {}",
        config
            .default_target
            .map_or_else(|| String::from("<latest>"), |v| v.to_string())
    );

    println!("\nPriority: CLI args > ENV vars (SCHEMAVER_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure schemaver.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
