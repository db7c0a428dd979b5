use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookRef;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut BookStore<B>, ids: &[BookRef]) -> Result<CmdResult> {
    let removed = store.delete(ids.iter().copied());
    let mut result = CmdResult::default();

    if removed.is_empty() {
        result.add_message(CmdMessage::info("Nothing to delete"));
    }
    for book in &removed {
        result.add_message(CmdMessage::success(format!(
            "Book deleted: {} by {}",
            book.title, book.author
        )));
    }

    Ok(result.with_affected_books(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn deletes_each_ref_once() {
        let mut fx = StoreFixture::new().with_books(&[
            ("Dune", "Herbert", "2020/01/01"),
            ("1984", "Orwell", "2021/06/15"),
        ]);
        let id = fx.store.entries()[0].id();

        let result = run(&mut fx.store, &[id, id]).unwrap();

        assert_eq!(result.affected_books.len(), 1);
        let listed = list::run(&fx.store, "").unwrap().listed_books;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].book.title, "1984");
    }

    #[test]
    fn stale_refs_are_a_no_op() {
        let mut fx = StoreFixture::new().with_books(&[("Dune", "Herbert", "2020/01/01")]);
        let id = fx.store.entries()[0].id();
        run(&mut fx.store, &[id]).unwrap();

        let result = run(&mut fx.store, &[id]).unwrap();

        assert!(result.affected_books.is_empty());
        assert_eq!(result.messages[0].content, "Nothing to delete");
        assert_eq!(fx.store.deleted().len(), 1);
    }
}
