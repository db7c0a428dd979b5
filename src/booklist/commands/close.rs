use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookListError, Result};
use crate::store::{BookStore, StorageBackend};

/// Prepare to exit: write pending changes if there is a file to write to.
///
/// With no file selected and new books pending, closing fails with
/// `NoFileSelected` unless the caller has confirmed they may be discarded.
pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    discard_unsaved: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let pending = store.unsaved_new_count();

    if store.current_file().is_none() {
        if pending > 0 {
            if !discard_unsaved {
                return Err(BookListError::NoFileSelected);
            }
            result.add_message(CmdMessage::warning(format!(
                "{} new books discarded",
                pending
            )));
        }
        return Ok(result);
    }

    if store.flush()? {
        let message = if pending > 0 {
            format!("{} books added to your list", pending)
        } else {
            "Changes saved".to_string()
        };
        result.add_message(CmdMessage::success(message));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn flushes_pending_books() {
        let mut fx = StoreFixture::opened().with_books(&[("Dune", "Herbert", "2020/01/01")]);
        let result = run(&mut fx.store, false).unwrap();

        assert_eq!(result.messages[0].content, "1 books added to your list");
        assert!(fx.saved().unwrap().contains("Dune"));
    }

    #[test]
    fn flushes_edits_without_new_books() {
        let mut fx = StoreFixture::with_file("2020/01/01,Herbert,Dune\n");
        let id = fx.store.entries()[0].id();
        fx.store.edit_field(id, Field::Author, "Frank Herbert").unwrap();

        let result = run(&mut fx.store, false).unwrap();

        assert_eq!(result.messages[0].content, "Changes saved");
        assert!(fx.saved().unwrap().contains("Frank Herbert"));
    }

    #[test]
    fn nothing_to_do_when_clean() {
        let mut fx = StoreFixture::opened();
        let result = run(&mut fx.store, false).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(fx.backend.write_count(), 0);
    }

    #[test]
    fn refuses_to_drop_new_books_without_a_file() {
        let mut fx = StoreFixture::new().with_books(&[("Dune", "Herbert", "2020/01/01")]);
        assert!(matches!(
            run(&mut fx.store, false),
            Err(BookListError::NoFileSelected)
        ));
        assert_eq!(fx.store.unsaved_new_count(), 1);
    }

    #[test]
    fn discards_when_confirmed() {
        let mut fx = StoreFixture::new().with_books(&[("Dune", "Herbert", "2020/01/01")]);
        let result = run(&mut fx.store, true).unwrap();
        assert_eq!(result.messages[0].content, "1 new books discarded");
    }
}
