use crate::commands::RecordCounts;
use crate::filter;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookStore<B>, query: &str) -> RecordCounts {
    let filtered_count = store
        .entries()
        .iter()
        .filter(|e| filter::matches(e.book(), query))
        .count();

    RecordCounts {
        total: store.len(),
        new_count: store.new_count(),
        filtered_count,
    }
}
