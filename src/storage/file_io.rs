//! File I/O utilities with atomic writes
//!
//! CSV files are written to a temp file and renamed into place, so a data
//! file is either completely written or not modified at all. Both directions
//! use the flat dialect of the data files: comma-delimited, no headers, no
//! quoting, variable record length.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::CcrmError;

/// Write CSV records to a file atomically (write to temp, then rename)
///
/// Returns the number of records written.
pub fn write_csv_atomic<P, I>(path: P, records: I) -> Result<usize, CcrmError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Vec<String>>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CcrmError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| CcrmError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(BufWriter::new(file));

    let mut count = 0;
    for record in records {
        writer
            .write_record(&record)
            .map_err(|e| CcrmError::Storage(format!("Failed to serialize record: {}", e)))?;
        count += 1;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| CcrmError::Storage(format!("Failed to flush data: {}", e)))?;
    buffered
        .flush()
        .map_err(|e| CcrmError::Storage(format!("Failed to flush data: {}", e)))?;
    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| CcrmError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(buffered);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CcrmError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(count)
}

/// Wrap any reader in the data file dialect
pub fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(rdr)
}

/// 1-based physical line of the record that starts at `byte`
///
/// The csv reader skips empty lines without counting them, and a record's
/// position points at the first of those skipped lines. Step past the line
/// terminators, then count newlines in the raw bytes.
pub fn line_at(contents: &[u8], byte: u64) -> usize {
    let mut start = usize::try_from(byte).unwrap_or(usize::MAX).min(contents.len());
    while matches!(contents.get(start), Some(b'\n' | b'\r')) {
        start += 1;
    }
    contents[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Whether a record came from a line holding nothing but whitespace
pub fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty()) && record.len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let written = write_csv_atomic(
            &path,
            vec![row(&["a", "b", "c"]), row(&["d", "", "f", "g"])],
        )
        .unwrap();
        assert_eq!(written, 2);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a,b,c\nd,,f,g\n");

        let mut reader = csv_reader(File::open(&path).unwrap());
        let records: Vec<StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][2], "f");
        assert_eq!(records[1].len(), 4);
    }

    #[test]
    fn test_fields_are_never_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic(&path, vec![row(&["has \"quotes\"", "x y"])]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "has \"quotes\",x y\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic(&path, vec![row(&["a"])]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.csv.tmp").exists());
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic(&path, vec![row(&["old"]), row(&["rows"])]).unwrap();
        write_csv_atomic(&path, vec![row(&["new"])]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_csv_atomic(&path, Vec::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_blank_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "a,b\n   \n,\n").unwrap();

        let mut reader = csv_reader(File::open(&path).unwrap());
        let records: Vec<StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert!(!is_blank(&records[0]));
        assert!(is_blank(&records[1]));
        // A lone separator is two empty fields, not a blank line
        assert!(!is_blank(&records[2]));
    }

    #[test]
    fn test_line_at_counts_empty_lines() {
        let contents = b"a,b\n\n\nc,d\n";
        let mut reader = csv_reader(&contents[..]);
        let records: Vec<StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 2);
        let byte = records[1].position().unwrap().byte();
        assert_eq!(byte, 4);
        assert_eq!(line_at(contents, byte), 4);
        assert_eq!(line_at(contents, 0), 1);
        assert_eq!(line_at(contents, 999), 5);
    }
}
