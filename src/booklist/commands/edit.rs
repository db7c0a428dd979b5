use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookRef, Field};
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    id: BookRef,
    field: Field,
    value: &str,
) -> Result<CmdResult> {
    store.edit_field(id, field, value)?;

    let mut result = CmdResult::default();
    if let Some(book) = store.get(id) {
        if value.is_empty() {
            result.add_message(CmdMessage::warning(format!("Book {} cleared", field)));
        } else {
            result.add_message(CmdMessage::success(format!(
                "Book updated ({}): {}",
                field, value
            )));
        }
        result.affected_books.push(book.clone());
        result.affected_refs.push(id);
    }
    Ok(result)
}
