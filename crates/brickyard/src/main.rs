//! Brickyard - Entry Point
//!
//! Boots the runtime over the bricks linked into this binary.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `brickyard` | Load every service and report the totals |
//! | `brickyard --list` | Also print each brick, its services and configuration files |

// Force-link brickyard-providers so the linkme cache registrations are included
extern crate brickyard_providers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use brickyard::catalog_report;
use brickyard::infrastructure::config::LoggingConfig;
use brickyard::infrastructure::logging::init_logging;
use brickyard::{Core, Environment};
use clap::Parser;
use tracing::info;

/// Command line interface for Brickyard
#[derive(Parser, Debug)]
#[command(name = "brickyard")]
#[command(about = "Brickyard - Compose applications from self-registering bricks")]
#[command(version)]
pub struct Cli {
    /// Application root directory (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Print every brick with its services and configuration files
    #[arg(short, long)]
    pub list: bool,

    /// Log level, overriding LOG_LEVEL
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let environment = Environment::load(&root);

    let mut logging = LoggingConfig::from_environment(&environment);
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    logging.json_format |= cli.json_logs;
    init_logging(&logging)?;

    let mut core = Core::builder()
        .install_root(&root)
        .environment(environment)
        .build()
        .context("Failed to build the runtime")?;
    core.load().context("Failed to load services")?;

    let services: usize = core.bricks().iter().map(|brick| brick.services().len()).sum();
    info!(bricks = core.bricks().len(), services, "Runtime ready");

    if cli.list {
        print!("{}", catalog_report(&core));
    } else {
        println!(
            "Loaded {} bricks with {} services",
            core.bricks().len(),
            services
        );
    }

    core.shutdown();
    Ok(())
}
