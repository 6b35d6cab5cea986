use anyhow::Result;
use clap::Parser;
use schemaver_core::VersionManager;
use std::path::PathBuf;

mod commands;
mod config;
mod input;
mod logging;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "schemaver", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Validate, upgrade and re-validate a sample legacy record
    Demo,
    /// Validate a record against a schema version
    ///
    /// Reads a JSON object from FILE (or stdin) and checks it against the
    /// requested schema version. Without --version the record's own
    /// `schema_version` field is used, defaulting to 1.
    ///
    /// Output is the validation outcome as JSON. The command exits with an
    /// error when the record is invalid or the version is unknown.
    Validate {
        /// Record file; `-` or omitted reads stdin
        file: Option<PathBuf>,

        /// Schema version to validate against
        #[arg(long)]
        version: Option<u32>,
    },
    /// Upgrade a record to a newer schema version
    ///
    /// Applies one upgrade step per version until the target is reached and
    /// prints the upgraded record. Records already at or past the target are
    /// printed unchanged.
    Upgrade {
        /// Record file; `-` or omitted reads stdin
        file: Option<PathBuf>,

        /// Target version (default: config `default_target`, else latest)
        #[arg(long)]
        to: Option<u32>,

        /// Fail instead of passing through versions with no upgrade step
        #[arg(long)]
        strict: bool,
    },
    /// Print the database migration script between two versions
    Script {
        from: u32,
        to: u32,

        /// Print the script for every hop between FROM and TO
        #[arg(long)]
        plan: bool,
    },
    /// Dump the schema registry as JSON
    Schemas {
        /// Show only this version
        #[arg(long)]
        version: Option<u32>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    logging::init(level, config.coloured)?;

    let pretty = config.pretty && !cli.compact;
    let manager = VersionManager::new();

    match cli.command {
        Commands::Demo => {
            commands::run_demo(&manager)?;
        }
        Commands::Validate { file, version } => {
            commands::run_validate(&manager, file, version, pretty)?;
        }
        Commands::Upgrade { file, to, strict } => {
            commands::run_upgrade(&manager, file, to, config.default_target, strict, pretty)?;
        }
        Commands::Script { from, to, plan } => {
            commands::show_script(&manager, from, to, plan)?;
        }
        Commands::Schemas { version } => {
            commands::show_schemas(&manager, version, pretty)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
