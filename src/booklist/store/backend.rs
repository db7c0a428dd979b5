use crate::error::Result;
use std::path::Path;

/// Abstract interface for raw list-file I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `BookStore` handles the "what" (records, flushing, invariants).
pub trait StorageBackend {
    /// Read the whole list file.
    /// Returns Ok(None) if the file does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the whole list file.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check whether the list file exists.
    fn exists(&self, path: &Path) -> bool;
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::rc::Rc<B> {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
