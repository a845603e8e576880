//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::paths::CcrmPaths;
use crate::config::settings::Settings;
use crate::error::CcrmResult;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Copy the data directory into a named backup
    Create {
        /// Backup name (defaults to backup_YYYYMMDD_HHMMSS)
        name: Option<String>,
    },

    /// Show the total size of a backup
    Size {
        name: String,
    },

    /// List all available backups
    List,
}

/// Handle a backup command
///
/// The current in-memory records are written out first so the backup sees
/// them.
pub fn handle_backup_command(
    storage: &Storage,
    paths: &CcrmPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> CcrmResult<()> {
    let manager = BackupManager::new(paths);

    match cmd {
        BackupCommands::Create { name } => {
            storage.save_all()?;

            let name = name.unwrap_or_else(BackupManager::timestamped_name);
            println!("Creating backup...");
            let report = manager.create_backup(&name)?;

            println!("Backup created: {}", name);
            println!("Location: {}", report.path.display());
            println!(
                "Copied {} file(s), {}",
                report.files_copied,
                format_size(report.bytes_copied)
            );
            if !report.is_complete() {
                println!("Skipped {} file(s):", report.skipped.len());
                for path in &report.skipped {
                    println!("  {}", path.display());
                }
            }
        }

        BackupCommands::Size { name } => {
            let bytes = manager.backup_size(&name)?;
            println!("{}: {} ({} bytes)", name, format_size(bytes), bytes);
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: ccrm backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                println!(
                    "  {}. {} ({}, {} file(s), {})",
                    i + 1,
                    backup.name,
                    settings.format_timestamp(&backup.created_at),
                    backup.file_count,
                    format_size(backup.size_bytes),
                );
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
