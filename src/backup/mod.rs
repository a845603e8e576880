//! Backup system for CCRM
//!
//! Backups are plain directory copies of the data directory, stored as
//! `<backup_dir>/<name>/...` with the data tree's relative layout.
//!
//! # Example
//!
//! ```rust,ignore
//! use ccrm::backup::BackupManager;
//! use ccrm::config::CcrmPaths;
//!
//! let paths = CcrmPaths::new()?;
//! let manager = BackupManager::new(&paths);
//!
//! let report = manager.create_backup(&BackupManager::timestamped_name())?;
//! println!("{} files copied", report.files_copied);
//! ```

mod manager;

pub use manager::{BackupInfo, BackupManager, BackupReport};
