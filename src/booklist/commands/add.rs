use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{validate_new, BookStore, StorageBackend};

/// Add a book unless an existing one has the same title and author.
/// `allow_duplicate` is the user's override of that check.
pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    title: &str,
    author: &str,
    date: Option<&str>,
    allow_duplicate: bool,
) -> Result<CmdResult> {
    validate_new(title, author)?;
    let mut result = CmdResult::default();

    let duplicate = store.has_duplicate(title, author);
    if duplicate && !allow_duplicate {
        result.add_message(CmdMessage::warning(format!(
            "Already in the list: {} by {}",
            title, author
        )));
        return Ok(result);
    }

    let id = store.add(title, author, date)?;
    if let Some(book) = store.get(id) {
        let verb = if duplicate { "Duplicate added" } else { "Book added" };
        result.add_message(CmdMessage::success(format!(
            "{}: {} by {} ({})",
            verb, book.title, book.author, book.date
        )));
        result.affected_books.push(book.clone());
        result.affected_refs.push(id);
    }

    Ok(result)
}
