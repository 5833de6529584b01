//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] plugs into `tracing_subscriber::fmt` as a
//! [`MakeWriter`]. When the log file grows past 10 MB it is renamed with a
//! timestamp suffix and a fresh file is started; only the newest three
//! backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Create new empty file
///    - Remove oldest backups beyond 3
pub struct FileWriter {
    file_path: PathBuf,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Writes `buf` to the file, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or if the lock was poisoned.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer.as_mut().ok_or_else(|| io::Error::other("No file available"))?;
        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(buf.len())
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.<timestamp>` and prunes backups.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let backup_path = PathBuf::from(format!("{}.{timestamp}", self.file_path.display()));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::other("Invalid file name"))?;
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically; newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Per-event handle returned by [`FileWriter::make_writer`].
#[derive(Debug)]
pub struct FileWriterHandle<'a>(&'a FileWriter);

impl Write for FileWriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterHandle(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousel.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"first\n").unwrap();
        let mut handle = writer.make_writer();
        handle.write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn rotates_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousel.log");
        let file = File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();

        let writer = FileWriter::new(path.clone());
        writer.write_bytes(b"fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("carousel.log."))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn keeps_three_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousel.log");
        for stamp in ["20260101T000000.000", "20260102T000000.000", "20260103T000000.000", "20260104T000000.000"] {
            fs::write(dir.path().join(format!("carousel.log.{stamp}")), "old").unwrap();
        }

        FileWriter::new(path).cleanup_old_backups().unwrap();

        assert!(!dir.path().join("carousel.log.20260101T000000.000").exists());
        assert!(dir.path().join("carousel.log.20260104T000000.000").exists());
    }
}
