//! # Display Indexes
//!
//! Users refer to books by their 1-based position in the full, unfiltered
//! list (`1`, `2`, `3-5`). Those numbers only mean something for the listing
//! they were read from, so commands resolve them to [`BookRef`]s once, up
//! front, and only then mutate the store.
//!
//! A filtered listing keeps each book's full-list index, so the number shown
//! next to a search hit can be passed straight to `edit` or `delete`.

use crate::model::{Book, BookRef};
use crate::store::Entry;
use std::str::FromStr;

/// A user-facing index for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    pub id: BookRef,
    pub index: DisplayIndex,
    pub book: Book,
    pub is_new: bool,
}

/// Assigns display indexes in store order.
pub fn index_books(entries: &[Entry]) -> Vec<DisplayBook> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| DisplayBook {
            id: entry.id(),
            index: DisplayIndex(i + 1),
            book: entry.book().clone(),
            is_new: entry.is_new(),
        })
        .collect()
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(0) => Err("Invalid index: indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5)
///
/// Start must be <= end. Whether the indexes exist is checked later, during
/// resolution.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start, end)) = s.split_once('-') {
        if start.is_empty() {
            return Err(format!("Invalid index format: {}", s));
        }
        let start = DisplayIndex::from_str(start)?;
        let end = DisplayIndex::from_str(end)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        return Ok((start.0..=end.0).map(DisplayIndex).collect());
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

/// Parses every input, flattening ranges and dropping repeats while keeping
/// the order in which indexes first appear.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>, String> {
    let mut out: Vec<DisplayIndex> = Vec::new();
    for input in inputs {
        for idx in parse_index_or_range(input.as_ref())? {
            if !out.contains(&idx) {
                out.push(idx);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn indexes_follow_store_order() {
        let fx = StoreFixture::new().with_books(&[
            ("Dune", "Herbert", "2020/01/01"),
            ("1984", "Orwell", "2021/06/15"),
        ]);
        let indexed = index_books(fx.store.entries());

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].book.title, "Dune");
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert!(indexed[1].is_new);
    }

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex(1)));
        assert_eq!(DisplayIndex::from_str("42"), Ok(DisplayIndex(42)));

        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_index_or_range("3-5"),
            Ok(vec![DisplayIndex(3), DisplayIndex(4), DisplayIndex(5)])
        );
        assert_eq!(parse_index_or_range("3-3"), Ok(vec![DisplayIndex(3)]));
        assert_eq!(parse_index_or_range("7"), Ok(vec![DisplayIndex(7)]));
    }

    #[test]
    fn test_parse_range_invalid() {
        let result = parse_index_or_range("5-3");
        assert!(result.unwrap_err().contains("must be <= end"));

        assert!(parse_index_or_range("abc-5").is_err());
        assert!(parse_index_or_range("3-xyz").is_err());
        assert!(parse_index_or_range("-5").is_err());
        assert!(parse_index_or_range("3-").is_err());
    }

    #[test]
    fn parse_indexes_drops_repeats() {
        assert_eq!(
            parse_indexes(&["2", "1-3", "2"]),
            Ok(vec![DisplayIndex(2), DisplayIndex(1), DisplayIndex(3)])
        );
    }
}
