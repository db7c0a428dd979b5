use super::backend::StorageBackend;
use crate::error::{BookListError, Result};
use std::fs;
use std::io;
use std::path::Path;
use uuid::Uuid;

/// Filesystem backend. Each call opens, uses and closes the file; nothing is
/// held open between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsBackend;

impl FsBackend {
    pub fn new() -> Self {
        Self
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(BookListError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BookListError::Io(e)),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("booklist");

        // Atomic write: the temp file lives next to the target so the rename
        // never crosses filesystems.
        let tmp_path = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BookListError::Io(e));
        }
        rename_with_fallback(&tmp_path, path).map_err(BookListError::Io)?;

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// On some platforms (notably Windows) `fs::rename` fails if the destination
/// exists. Retry after removing it, and clean up the temp file if that fails too.
fn rename_with_fallback(tmp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(tmp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(tmp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(tmp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let backend = FsBackend::new();
        assert_eq!(backend.read(&temp.path().join("books.json")).unwrap(), None);
    }

    #[test]
    fn write_replaces_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("books.json");
        let backend = FsBackend::new();

        backend.write(&path, "old").unwrap();
        backend.write(&path, "new").unwrap();

        assert_eq!(backend.read(&path).unwrap().as_deref(), Some("new"));
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("list").join("books.json");
        FsBackend::new().write(&path, "[]\n").unwrap();
        assert!(FsBackend::new().exists(&path));
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        // A plain file where the parent directory should be
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("books.json");

        assert!(FsBackend::new().write(&path, "[]\n").is_err());
        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["not-a-dir".to_string()]);
    }

    #[test]
    fn directories_are_not_list_files() {
        let temp = TempDir::new().unwrap();
        assert!(!FsBackend::new().exists(temp.path()));
        assert!(FsBackend::new().read(temp.path()).is_err());
    }
}
