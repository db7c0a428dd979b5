//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every booklist operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display indexes → [`BookRef`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no presentation state. A UI never mutates a
//! [`crate::model::Book`] directly; it calls [`BookListApi::edit_field`].
//!
//! ## Generic Over StorageBackend
//!
//! `BookListApi<B: StorageBackend>`:
//! - Production: `BookListApi<FsBackend>`
//! - Testing: `BookListApi<MemBackend>`

use crate::commands;
use crate::error::{BookListError, Result};
use crate::index::parse_indexes;
use crate::model::{BookRef, Field};
use crate::store::{BookStore, StorageBackend};
use std::path::{Path, PathBuf};

pub struct BookListApi<B: StorageBackend> {
    store: BookStore<B>,
    config_dir: PathBuf,
}

impl<B: StorageBackend> BookListApi<B> {
    pub fn new(store: BookStore<B>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn list_records(&self, query: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn add_record(
        &mut self,
        title: &str,
        author: &str,
        date: Option<&str>,
        allow_duplicate: bool,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author, date, allow_duplicate)
    }

    pub fn check_duplicate(&self, title: &str, author: &str) -> bool {
        self.store.has_duplicate(title, author)
    }

    pub fn edit_field(
        &mut self,
        id: BookRef,
        field: Field,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, field, value)
    }

    pub fn delete_records(&mut self, ids: &[BookRef]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn switch_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.store, path)
    }

    pub fn needs_file_prompt(&self, force_prompt: bool) -> bool {
        self.store.needs_file_prompt(force_prompt)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store)
    }

    pub fn close(&mut self, discard_unsaved: bool) -> Result<commands::CmdResult> {
        commands::close::run(&mut self.store, discard_unsaved)
    }

    pub fn record_count(&self, query: &str) -> RecordCounts {
        commands::count::run(&self.store, query)
    }

    /// Resolve user-typed indexes and ranges ("1", "3-5") to refs.
    pub fn resolve_indexes<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<BookRef>> {
        let indexes = parse_indexes(inputs).map_err(BookListError::Api)?;
        let resolved = commands::helpers::resolve_indexes(&self.store, &indexes)?;
        Ok(resolved.into_iter().map(|(_, id)| id).collect())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.store.current_file()
    }

    pub fn unsaved_new_count(&self) -> usize {
        self.store.unsaved_new_count()
    }

    pub fn store(&self) -> &BookStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RecordCounts};
