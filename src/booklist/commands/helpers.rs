use crate::error::{BookListError, Result};
use crate::index::{index_books, DisplayIndex};
use crate::model::BookRef;
use crate::store::{BookStore, StorageBackend};

/// Turn display indexes into refs against the store as it is right now.
/// Fails on the first index that does not exist, before anything changes.
pub fn resolve_indexes<B: StorageBackend>(
    store: &BookStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, BookRef)>> {
    let indexed = index_books(store.entries());

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|db| &db.index == idx)
                .map(|db| (*idx, db.id))
                .ok_or_else(|| BookListError::Api(format!("Index {} not found in the list", idx)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn resolves_in_request_order() {
        let fx = StoreFixture::new().with_books(&[
            ("Dune", "Herbert", "2020/01/01"),
            ("1984", "Orwell", "2021/06/15"),
        ]);
        let resolved = resolve_indexes(&fx.store, &[DisplayIndex(2), DisplayIndex(1)]).unwrap();
        assert_eq!(resolved[0].1, fx.store.entries()[1].id());
        assert_eq!(resolved[1].1, fx.store.entries()[0].id());
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fx = StoreFixture::new().with_books(&[("Dune", "Herbert", "2020/01/01")]);
        let err = resolve_indexes(&fx.store, &[DisplayIndex(1), DisplayIndex(4)]).unwrap_err();
        assert!(err.to_string().contains("Index 4 not found"));
    }
}
