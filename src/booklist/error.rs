use crate::model::BookRef;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookListError {
    #[error("Invalid book: {0}")]
    Validation(String),

    #[error("Book not found: {0}")]
    NotFound(BookRef),

    #[error("Could not read book list {}: {reason}", path.display())]
    CorruptFile { path: PathBuf, reason: String },

    #[error("No book list file selected")]
    NoFileSelected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BookListError>;
