//! # Storage Layer
//!
//! [`BookStore`] is the in-memory list of books and the only thing allowed to
//! change it. It keeps the books in insertion order, remembers which ones were
//! added during this session, keeps what was deleted for auditing, and knows
//! which file (if any) backs the list.
//!
//! ## Backends
//!
//! Raw file I/O goes through the [`StorageBackend`] trait:
//!
//! - [`fs_backend::FsBackend`]: production, atomic temp-file-and-rename writes
//! - [`mem_backend::MemBackend`]: in-memory, for tests
//!
//! The file content itself is produced and parsed by [`crate::codec`].
//!
//! ## References
//!
//! Every stored book gets a [`BookRef`] when it enters the store. Edits and
//! deletions address books by ref, never by position, so removing one book
//! cannot shift another book under a caller's feet, and two books with the
//! same fields stay distinguishable.
//!
//! ## Flushing
//!
//! Any add, edit or delete marks the store as having unsaved changes. Loading
//! another file first writes those changes to the current file. When no file
//! has been selected yet, the unsaved new books are carried over into the
//! file being loaded instead, so nothing added is ever silently dropped.

use crate::codec::{Codec, Format};
use crate::error::{BookListError, Result};
use crate::model::{today, Book, BookRef, Field};
use crate::observer::{NoopObserver, StoreEvent, StoreObserver};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

/// A book as held by the store.
#[derive(Debug, Clone)]
pub struct Entry {
    id: BookRef,
    book: Book,
    is_new: bool,
    persisted: bool,
}

impl Entry {
    fn loaded(book: Book) -> Self {
        Self {
            id: BookRef::new(),
            book,
            is_new: false,
            persisted: true,
        }
    }

    fn added(book: Book) -> Self {
        Self {
            id: BookRef::new(),
            book,
            is_new: true,
            persisted: false,
        }
    }

    pub fn id(&self) -> BookRef {
        self.id
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Added during this session rather than loaded from the file.
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

pub struct BookStore<B: StorageBackend> {
    backend: B,
    codec: Codec,
    observer: Box<dyn StoreObserver>,
    entries: Vec<Entry>,
    deleted: Vec<Book>,
    current_file: Option<PathBuf>,
    // The current file was missing when loaded and has not been written yet.
    awaiting_first_save: bool,
    dirty: bool,
}

impl<B: StorageBackend> BookStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            codec: Codec::default(),
            observer: Box::new(NoopObserver),
            entries: Vec::new(),
            deleted: Vec::new(),
            current_file: None,
            awaiting_first_save: false,
            dirty: false,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn StoreObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: BookRef) -> Option<&Book> {
        self.position(id).map(|pos| &self.entries[pos].book)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn new_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_new).count()
    }

    /// Books removed during this session. Never written back to a file.
    pub fn deleted(&self) -> &[Book] {
        &self.deleted
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// New books that no file has seen yet.
    pub fn unsaved_new_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.is_new && !e.persisted)
            .count()
    }

    /// Whether the caller should ask the user for a list file: always when
    /// forced, otherwise when none is selected or the selected one is gone.
    /// A file picked before it existed counts as selected until its first
    /// save creates it.
    pub fn needs_file_prompt(&self, force: bool) -> bool {
        match &self.current_file {
            _ if force => true,
            None => true,
            Some(_) if self.awaiting_first_save => false,
            Some(path) => !self.backend.exists(path),
        }
    }

    /// Append a book. Title and author must be non-empty; a missing date
    /// means today.
    pub fn add(&mut self, title: &str, author: &str, date: Option<&str>) -> Result<BookRef> {
        validate_new(title, author)?;

        let date = date.map(str::to_string).unwrap_or_else(today);
        let entry = Entry::added(Book::new(title, author, date));
        let id = entry.id;

        self.observer.notify(&StoreEvent::Added {
            id,
            book: entry.book.clone(),
        });
        self.entries.push(entry);
        self.dirty = true;

        Ok(id)
    }

    /// Case-insensitive title and author match against every stored book.
    /// Never blocks an add; the caller decides what to do with a duplicate.
    pub fn has_duplicate(&self, title: &str, author: &str) -> bool {
        self.entries.iter().any(|e| e.book.same_work(title, author))
    }

    /// Overwrite one field of one book. Empty values are accepted.
    pub fn edit_field(
        &mut self,
        id: BookRef,
        field: Field,
        value: impl Into<String>,
    ) -> Result<()> {
        let pos = self.position(id).ok_or(BookListError::NotFound(id))?;
        let value = value.into();

        self.observer.notify(&StoreEvent::Edited {
            id,
            field,
            value: value.clone(),
        });
        let entry = &mut self.entries[pos];
        entry.book.set_field(field, value);
        entry.persisted = false;
        self.dirty = true;

        Ok(())
    }

    /// Remove books by ref. Refs that are no longer in the store (including
    /// repeats within the same batch) are skipped. Returns the removed books.
    pub fn delete<I>(&mut self, ids: I) -> Vec<Book>
    where
        I: IntoIterator<Item = BookRef>,
    {
        let mut seen = HashSet::new();
        let mut removed = Vec::new();

        for id in ids {
            if !seen.insert(id) {
                continue;
            }
            // Look the position up again for every ref: earlier removals
            // shift everything after them.
            let Some(pos) = self.position(id) else {
                continue;
            };
            let entry = self.entries.remove(pos);
            self.observer.notify(&StoreEvent::Deleted {
                id,
                book: entry.book.clone(),
            });
            self.deleted.push(entry.book.clone());
            removed.push(entry.book);
        }

        if !removed.is_empty() {
            self.dirty = true;
        }
        removed
    }

    /// Switch to another list file.
    ///
    /// Unsaved changes are written to the current file first. If the new file
    /// cannot be read or decoded, the store is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Format> {
        let path = path.as_ref();

        let mut carried = Vec::new();
        if self.dirty {
            match self.current_file.clone() {
                Some(current) => {
                    self.save()?;
                    self.observer.notify(&StoreEvent::Flushed { path: current });
                }
                None => {
                    carried = self
                        .entries
                        .iter()
                        .filter(|e| e.is_new && !e.persisted)
                        .cloned()
                        .collect();
                }
            }
        }

        let existing = self.backend.read(path)?;
        let missing = existing.is_none();
        let text = existing.unwrap_or_default();
        let decoded = self
            .codec
            .decode(&text, self.observer.as_ref())
            .map_err(|e| BookListError::CorruptFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let count = decoded.books.len();
        self.dirty = !carried.is_empty();
        self.entries = decoded.books.into_iter().map(Entry::loaded).collect();
        self.entries.extend(carried);
        self.current_file = Some(path.to_path_buf());
        self.awaiting_first_save = missing;

        self.observer.notify(&StoreEvent::Loaded {
            path: path.to_path_buf(),
            format: decoded.format,
            count,
        });

        Ok(decoded.format)
    }

    /// Rewrite the current file with every book, old and new, in the
    /// structured format.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .current_file
            .clone()
            .ok_or(BookListError::NoFileSelected)?;

        let books: Vec<Book> = self.entries.iter().map(|e| e.book.clone()).collect();
        let content = self.codec.encode(&books)?;
        self.backend.write(&path, &content)?;

        for entry in &mut self.entries {
            entry.persisted = true;
        }
        self.dirty = false;
        self.awaiting_first_save = false;

        self.observer.notify(&StoreEvent::Saved {
            path,
            count: books.len(),
        });
        Ok(())
    }

    /// Save only if something changed. Returns whether a write happened.
    pub fn flush(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn position(&self, id: BookRef) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

/// Title and author must both be non-empty for a new book.
pub fn validate_new(title: &str, author: &str) -> Result<()> {
    if title.is_empty() {
        return Err(BookListError::Validation("title cannot be empty".into()));
    }
    if author.is_empty() {
        return Err(BookListError::Validation("author cannot be empty".into()));
    }
    Ok(())
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::*;
    use std::rc::Rc;

    pub const LIST_PATH: &str = "/lists/books.json";

    pub struct StoreFixture {
        pub backend: Rc<MemBackend>,
        pub store: BookStore<Rc<MemBackend>>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let backend = Rc::new(MemBackend::new());
            Self {
                store: BookStore::new(Rc::clone(&backend)),
                backend,
            }
        }

        /// Seed the list file and load it.
        pub fn with_file(content: &str) -> Self {
            let backend = Rc::new(MemBackend::new().with_file(LIST_PATH, content));
            let mut store = BookStore::new(Rc::clone(&backend));
            store.load(LIST_PATH).unwrap();
            Self { backend, store }
        }

        /// An empty list file, already selected.
        pub fn opened() -> Self {
            Self::with_file("")
        }

        pub fn with_books(mut self, books: &[(&str, &str, &str)]) -> Self {
            for (title, author, date) in books {
                self.store.add(title, author, Some(date)).unwrap();
            }
            self
        }

        pub fn saved(&self) -> Option<String> {
            self.backend.contents(Path::new(LIST_PATH))
        }
    }
}
