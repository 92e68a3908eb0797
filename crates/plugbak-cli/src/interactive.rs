//! Interactive prompts for omitted arguments
//!
//! Uses dialoguer for terminal-based input.

use std::path::PathBuf;

use dialoguer::Input;

use crate::error::Result;

/// Ask for the backup destination root.
pub fn prompt_destination() -> Result<PathBuf> {
    let destination: String = Input::new()
        .with_prompt("Enter backup destination, e.g. /var/backups")
        .interact_text()?;
    Ok(PathBuf::from(destination))
}

/// Ask for the backup folder name.
pub fn prompt_folder() -> Result<String> {
    let folder = Input::new()
        .with_prompt("Enter backup folder name, e.g. plugin_backup")
        .interact_text()?;
    Ok(folder)
}
