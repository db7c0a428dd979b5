//! Case-insensitive substring search over every field of every book.
//!
//! The projection is recomputed from the store on every call; nothing is
//! cached or indexed.

use crate::index::{index_books, DisplayBook};
use crate::model::{Book, Field};
use crate::store::{BookStore, StorageBackend};

/// True when `query` appears in the title, author or date, ignoring case.
/// An empty query matches everything.
pub fn matches(book: &Book, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    Field::ALL
        .iter()
        .any(|field| book.field(*field).to_lowercase().contains(&query))
}

/// The books matching `query`, in store order, each carrying its index in
/// the full list.
pub fn project<B: StorageBackend>(store: &BookStore<B>, query: &str) -> Vec<DisplayBook> {
    index_books(store.entries())
        .into_iter()
        .filter(|db| matches(&db.book, query))
        .collect()
}
