use crate::config::BookListConfig;
use crate::index::DisplayBook;
use crate::model::{Book, BookRef};
use std::path::PathBuf;

pub mod add;
pub mod close;
pub mod config;
pub mod count;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod open;
pub mod save;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Status-line numbers: everything, what was added this session, and what
/// the current filter shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCounts {
    pub total: usize,
    pub new_count: usize,
    pub filtered_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    /// Refs of books added or changed, usable for follow-up edits and deletes
    pub affected_refs: Vec<BookRef>,
    pub listed_books: Vec<DisplayBook>,
    pub counts: Option<RecordCounts>,
    pub file: Option<PathBuf>,
    pub config: Option<BookListConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_counts(mut self, counts: RecordCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_config(mut self, config: BookListConfig) -> Self {
        self.config = Some(config);
        self
    }
}
