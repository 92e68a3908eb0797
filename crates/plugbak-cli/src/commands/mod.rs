//! Command implementations

mod backup;
mod restore;

pub use backup::run_backup;
pub use restore::run_restore;

use colored::Colorize;
use plugbak_core::PluginDescriptor;

/// Progress line printed for every plugin, before its tree is copied.
/// Backup and restore share the format.
fn progress_line(verb: &'static str) -> impl FnMut(&PluginDescriptor) {
    move |plugin| {
        println!(
            "{} {} {} ({}) version {}",
            "+".green().bold(),
            verb,
            plugin.display_name.cyan(),
            plugin.qualified_name().dimmed(),
            plugin.disk_version
        );
    }
}
