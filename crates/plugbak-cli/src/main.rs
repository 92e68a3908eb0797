//! Plugin Backup Manager CLI
//!
//! Backs up the directory trees of a host application's additional
//! plugins into a backup set, and restores them from its manifest.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Mode};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Mode is validated before anything touches the filesystem.
    let mode: Mode = cli.mode.parse()?;

    let destination = match cli.destination {
        Some(destination) => destination,
        None => interactive::prompt_destination()?,
    };
    let folder = match cli.folder {
        Some(folder) => folder,
        None => interactive::prompt_folder()?,
    };

    match mode {
        Mode::Backup => {
            let registry = cli
                .registry
                .ok_or_else(|| CliError::user("--registry is required in backup mode"))?;
            commands::run_backup(&destination, &folder, &registry)
        }
        Mode::Restore => commands::run_restore(&destination, &folder),
    }
}
