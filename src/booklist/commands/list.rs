use crate::commands::{count, CmdResult};
use crate::error::Result;
use crate::filter;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookStore<B>, query: &str) -> Result<CmdResult> {
    let listed = filter::project(store, query);
    let counts = count::run(store, query);

    Ok(CmdResult::default()
        .with_listed_books(listed)
        .with_counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_matching_books_with_full_list_indexes() {
        let fx = StoreFixture::new().with_books(&[
            ("Dune", "Herbert", "2020/01/01"),
            ("1984", "Orwell", "2021/06/15"),
        ]);

        let result = run(&fx.store, "2021").unwrap();

        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].index, DisplayIndex(2));
        let counts = result.counts.unwrap();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.filtered_count, 1);
    }

    #[test]
    fn lists_everything_for_empty_query() {
        let fx = StoreFixture::new().with_books(&[
            ("Dune", "Herbert", "2020/01/01"),
            ("1984", "Orwell", "2021/06/15"),
        ]);
        let titles: Vec<_> = run(&fx.store, "")
            .unwrap()
            .listed_books
            .into_iter()
            .map(|db| db.book.title)
            .collect();
        assert_eq!(titles, vec!["Dune", "1984"]);
    }
}
