//! CLI argument parsing using clap derive

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::error::CliError;

/// Back up and restore a host application's additional plugins
#[derive(Parser, Debug)]
#[command(name = "plugbak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backup destination root
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Backup folder name inside the destination
    #[arg(long)]
    pub folder: Option<String>,

    /// Operation mode (backup or restore)
    #[arg(long, default_value = "backup")]
    pub mode: String,

    /// Host plugin registry export (JSON array), required for backup
    #[arg(long, env = "PLUGBAK_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Operation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Backup,
    Restore,
}

impl FromStr for Mode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backup" => Ok(Self::Backup),
            "restore" => Ok(Self::Restore),
            other => Err(CliError::user(format!("Invalid mode: {other}"))),
        }
    }
}
