use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the schemaver CLI.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SCHEMAVER_* prefix)
/// 3. Config file (~/.config/schemaver/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level: trace, debug, info, warn or error.
    ///
    /// Can be set via:
    /// - CLI: --verbose (forces debug)
    /// - ENV: SCHEMAVER_LOG_LEVEL
    /// - Config: log_level = "info"
    pub log_level: String,

    /// Colour log output.
    pub coloured: bool,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Upgrade target when `upgrade` is run without `--to`.
    ///
    /// When unset, records are upgraded to the newest known version.
    pub default_target: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            coloured: true,
            pretty: true,
            default_target: None,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("schemaver");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/schemaver/config.toml
/// - macOS: ~/Library/Application Support/schemaver/config.toml
/// - Windows: %APPDATA%\schemaver\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("schemaver")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Schemaver Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SCHEMAVER_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Log level: trace, debug, info, warn, error
# --verbose on the command line forces debug.
log_level = "info"

# Colour log output
coloured = true

# Pretty-print JSON output
pretty = true

# Version that `schemaver upgrade` targets when --to is not given.
# Default: the newest known schema version
#default_target = 3
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(config.coloured);
        assert!(config.pretty);
        assert!(config.default_target.is_none());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "log_level": "warn",
            "coloured": false,
        }))
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(!config.coloured);
        assert!(config.pretty);
    }

    #[test]
    fn test_config_file_path_ends_with_toml() {
        assert!(config_file_path().ends_with("schemaver/config.toml"));
    }
}
