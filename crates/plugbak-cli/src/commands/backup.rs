//! Backup command

use std::path::Path;

use colored::Colorize;

use plugbak_core::{BackupEngine, BackupSet, FileRegistry};

use crate::error::Result;

use super::progress_line;

/// Run the backup command
///
/// Creates the backup set directory fresh, discovers additional
/// plugins through the registry export, writes the manifest, and
/// copies every plugin tree.
pub fn run_backup(destination: &Path, folder: &str, registry_path: &Path) -> Result<()> {
    println!(
        "{} Backing up additional plugins to {}",
        "=>".blue().bold(),
        destination.join(folder).display()
    );

    let registry = FileRegistry::new(registry_path);
    let set = BackupSet::new(destination, folder);
    let engine = BackupEngine::new(set, &registry);

    let report = engine.run(progress_line("Backing up"))?;

    println!(
        "{} Backed up {} plugins to {}",
        "OK".green().bold(),
        report.plugins.len(),
        report.backup_path.display()
    );
    Ok(())
}
