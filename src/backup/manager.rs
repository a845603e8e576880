//! Backup manager for CCRM
//!
//! A backup is a named directory under the backup directory holding a copy
//! of the data directory tree. Copying is best-effort: a file that cannot be
//! copied is logged and skipped, and the rest of the backup proceeds.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::paths::CcrmPaths;
use crate::error::{CcrmError, CcrmResult};

const TIMESTAMP_PREFIX: &str = "backup_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Metadata about an existing backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup directory name
    pub name: String,
    /// Full path to the backup directory
    pub path: PathBuf,
    /// Timestamp from the name, or the directory's modification time
    pub created_at: NaiveDateTime,
    /// Total size of the files inside, in bytes
    pub size_bytes: u64,
    pub file_count: usize,
}

/// Outcome of a single backup run
#[derive(Debug, Clone)]
pub struct BackupReport {
    pub path: PathBuf,
    pub files_copied: usize,
    pub bytes_copied: u64,
    /// Files that could not be copied
    pub skipped: Vec<PathBuf>,
}

impl BackupReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Manages backup creation and inspection
pub struct BackupManager {
    data_dir: PathBuf,
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &CcrmPaths) -> Self {
        Self {
            data_dir: paths.data_dir(),
            backup_dir: paths.backup_dir(),
        }
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// A fresh backup name such as `backup_20240901_083000`
    pub fn timestamped_name() -> String {
        format!("{}{}", TIMESTAMP_PREFIX, Local::now().format(TIMESTAMP_FORMAT))
    }

    /// Copy every regular file in the data directory into `<backup_dir>/<name>`
    ///
    /// An existing backup with the same name is reused and its files
    /// overwritten. Relative paths inside the data directory are preserved.
    pub fn create_backup(&self, name: &str) -> CcrmResult<BackupReport> {
        validate_name(name)?;

        if !self.data_dir.is_dir() {
            return Err(CcrmError::Backup(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )));
        }

        let target = self.backup_dir.join(name);
        fs::create_dir_all(&target)
            .map_err(|e| CcrmError::Io(format!("Failed to create backup directory: {}", e)))?;

        let mut report = BackupReport {
            path: target.clone(),
            files_copied: 0,
            bytes_copied: 0,
            skipped: Vec::new(),
        };

        for entry in WalkDir::new(&self.data_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    report.skipped.push(path);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match self.copy_into(entry.path(), &target) {
                Ok(bytes) => {
                    debug!(file = %entry.path().display(), bytes, "copied");
                    report.files_copied += 1;
                    report.bytes_copied += bytes;
                }
                Err(e) => {
                    warn!(file = %entry.path().display(), error = %e, "failed to copy");
                    report.skipped.push(entry.path().to_path_buf());
                }
            }
        }

        info!(
            backup = name,
            files = report.files_copied,
            bytes = report.bytes_copied,
            skipped = report.skipped.len(),
            "backup created"
        );

        Ok(report)
    }

    fn copy_into(&self, source: &Path, target: &Path) -> std::io::Result<u64> {
        let relative = source
            .strip_prefix(&self.data_dir)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let dest = target.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, dest)
    }

    /// Total bytes of all files under a named backup; 0 if it does not exist
    pub fn backup_size(&self, name: &str) -> CcrmResult<u64> {
        validate_name(name)?;
        let path = self.backup_dir.join(name);
        if !path.exists() {
            return Ok(0);
        }
        Ok(dir_stats(&path)?.0)
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> CcrmResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| CcrmError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| CcrmError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let (size_bytes, file_count) = dir_stats(&path)?;
            let created_at = parse_backup_timestamp(&name)
                .or_else(|| modified_time(&path))
                .unwrap_or(NaiveDateTime::MIN);

            backups.push(BackupInfo {
                name,
                path,
                created_at,
                size_bytes,
                file_count,
            });
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.name.cmp(&a.name)));

        Ok(backups)
    }
}

/// Reject names that would escape the backup directory
fn validate_name(name: &str) -> CcrmResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
    {
        return Err(CcrmError::Validation(format!(
            "Invalid backup name: '{}'",
            name
        )));
    }
    Ok(())
}

/// Total file bytes and file count under `root`
fn dir_stats(root: &Path) -> CcrmResult<(u64, usize)> {
    let mut bytes = 0;
    let mut files = 0;

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| CcrmError::Backup(format!("Failed to walk backup: {}", e)))?;
        if entry.file_type().is_file() {
            let metadata = entry
                .metadata()
                .map_err(|e| CcrmError::Backup(format!("Failed to read metadata: {}", e)))?;
            bytes += metadata.len();
            files += 1;
        }
    }

    Ok((bytes, files))
}

/// Parse `backup_YYYYMMDD_HHMMSS`
fn parse_backup_timestamp(name: &str) -> Option<NaiveDateTime> {
    let stamp = name.strip_prefix(TIMESTAMP_PREFIX)?;
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

fn modified_time(path: &Path) -> Option<NaiveDateTime> {
    let modified: SystemTime = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(modified).naive_local())
}
