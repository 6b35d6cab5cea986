use anyhow::{anyhow, Result};
use twyg::{LogLevel, OptsBuilder};

/// Map a configured level name to a twyg level. Unknown names fall back to info.
fn parse_level(name: &str) -> LogLevel {
    match name.to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

/// Install twyg as the global logger.
pub fn init(level: &str, coloured: bool) -> Result<()> {
    let opts = OptsBuilder::new()
        .coloured(coloured)
        .level(parse_level(level))
        .report_caller(false)
        .build()
        .map_err(|e| anyhow!("Failed to build logger options: {:?}", e))?;

    twyg::setup(opts).map_err(|e| anyhow!("Failed to set up logger: {:?}", e))?;
    Ok(())
}
