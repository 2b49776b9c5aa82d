use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Outcome of an idempotent file materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Created,
    Skipped,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Created => "created",
            FileStatus::Skipped => "skipped",
        }
    }
}

/// Create a directory and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| Error::internal_io(e.to_string(), Some("create directory".to_string())))?;
    }
    Ok(())
}

/// Write `content` to `path` if the file does not already exist.
///
/// Missing parent directories are created. An existing file is never
/// touched, so re-running the generator against a partially built
/// project converges on the first run's content.
pub fn ensure_file(path: &Path, content: &str) -> Result<FileStatus> {
    if path.exists() {
        return Ok(FileStatus::Skipped);
    }

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    write_atomic(path, content)?;
    Ok(FileStatus::Created)
}

/// Atomic write: write to temp file in the same directory, then rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some("write file".to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some("write file".to_string()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some("write temp file".to_string())))?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::internal_io(e.to_string(), Some("rename temp file".to_string())))?;

    Ok(())
}

/// Read a file to string, with path context on failure.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::internal_io(
                format!("File not found: {}", path.display()),
                Some("read file".to_string()),
            )
        } else {
            Error::internal_io(e.to_string(), Some("read file".to_string()))
        }
    })
}

/// Overwrite `path` with `content` (atomic). Used for the manifest,
/// which is read-modify-write rather than skip-if-exists.
pub fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    write_atomic(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_file_creates_with_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/c.txt");

        let status = ensure_file(&path, "hello").unwrap();
        assert_eq!(status, FileStatus::Created);
        assert_eq!(read(&path).unwrap(), "hello");
    }

    #[test]
    fn ensure_file_skips_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main.py");

        assert_eq!(ensure_file(&path, "first").unwrap(), FileStatus::Created);
        assert_eq!(ensure_file(&path, "second").unwrap(), FileStatus::Skipped);
        assert_eq!(read(&path).unwrap(), "first");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir");

        ensure_dir(&path).unwrap();
        ensure_dir(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.toml");

        write(&path, "a = 1\n").unwrap();
        write(&path, "a = 2\n").unwrap();
        assert_eq!(read(&path).unwrap(), "a = 2\n");
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write(&path, "content").unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }
}
