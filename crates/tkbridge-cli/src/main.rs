//! tkbridge command-line embedder
//!
//! Hosts the widget bindings in the reference interpreter, against the
//! headless toolkit.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tkbridge::BridgeConfig;

mod commands;
mod logging;

/// Default config file looked up in the working directory
const DEFAULT_CONFIG: &str = "tkbridge.toml";

#[derive(Parser)]
#[command(name = "tkbridge")]
#[command(about = "Widget toolkit bindings for an embedded scripting runtime", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./tkbridge.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `tkbridge=debug`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the mirrored class tree
    Classes,

    /// Build a window with a button and click it through the event loop
    Demo {
        /// Number of synthetic clicks
        #[arg(short = 'n', long, default_value_t = 3)]
        clicks: u32,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BridgeConfig> {
    match path {
        Some(path) => Ok(BridgeConfig::from_file(path)?),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            Ok(BridgeConfig::from_file(Path::new(DEFAULT_CONFIG))?)
        }
        None => Ok(BridgeConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    logging::init(cli.log.as_deref(), &config.log.filter)?;

    match cli.command {
        Commands::Classes => commands::classes::execute(&config),
        Commands::Demo { clicks } => commands::demo::execute(&config, clicks),
    }
}
