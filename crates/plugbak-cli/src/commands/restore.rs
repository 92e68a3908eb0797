//! Restore command

use std::path::Path;

use colored::Colorize;

use plugbak_core::{BackupSet, RestoreEngine};

use crate::error::Result;

use super::progress_line;

/// Run the restore command
///
/// Loads the backup set's manifest and puts every listed plugin tree
/// back at its recorded install location.
pub fn run_restore(destination: &Path, folder: &str) -> Result<()> {
    println!(
        "{} Restoring additional plugins from {}",
        "=>".blue().bold(),
        destination.join(folder).display()
    );

    let set = BackupSet::new(destination, folder);
    let report = RestoreEngine::new(set).run(progress_line("Restoring"))?;

    if report.plugins.is_empty() {
        println!(
            "{} Manifest lists no plugins. Nothing to restore.",
            "OK".yellow().bold()
        );
    } else {
        println!(
            "{} Restored {} plugins",
            "OK".green().bold(),
            report.plugins.len()
        );
    }
    Ok(())
}
