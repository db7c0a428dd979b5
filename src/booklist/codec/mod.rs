//! # Persistence Codec
//!
//! Turns the text of a list file into books and back.
//!
//! Two on-disk formats exist:
//!
//! - **Structured** ([`structured`]): a JSON array of `{title, author, date}`
//!   objects, pretty-printed with a one-space indent. This is the only format
//!   ever written.
//! - **Legacy** ([`legacy`]): one `date,author,title` line per book. Read-only;
//!   a legacy file is upgraded to the structured format on its next save.
//!
//! Decoding walks an ordered list of [`BookParser`]s. The first parser that
//! accepts the text wins; a rejection just moves on to the next one. Only
//! when every parser has rejected the text does decoding fail, and the
//! resulting [`DecodeError`] carries each parser's reason.

use crate::error::Result;
use crate::model::Book;
use crate::observer::{StoreEvent, StoreObserver};
use std::fmt;

pub mod legacy;
pub mod structured;

pub use legacy::LegacyParser;
pub use structured::StructuredParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Structured,
    Legacy,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Structured => f.write_str("structured"),
            Format::Legacy => f.write_str("legacy"),
        }
    }
}

/// One way of reading a list file.
pub trait BookParser {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn format(&self) -> Format;

    /// Parse the whole file, or explain why this parser does not apply.
    fn parse(&self, text: &str) -> std::result::Result<Vec<Book>, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub books: Vec<Book>,
    pub format: Format,
}

/// Every parser rejected the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub attempts: Vec<(&'static str, String)>,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<String> = self
            .attempts
            .iter()
            .map(|(name, reason)| format!("{}: {}", name, reason))
            .collect();
        write!(f, "no known format matched ({})", reasons.join("; "))
    }
}

pub struct Codec {
    parsers: Vec<Box<dyn BookParser>>,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(vec![Box::new(StructuredParser), Box::new(LegacyParser)])
    }
}

impl Codec {
    pub fn new(parsers: Vec<Box<dyn BookParser>>) -> Self {
        Self { parsers }
    }

    pub fn decode(
        &self,
        text: &str,
        observer: &dyn StoreObserver,
    ) -> std::result::Result<Decoded, DecodeError> {
        // A freshly created list file is empty; treat it as an empty list
        // rather than asking every parser about it.
        if text.trim().is_empty() {
            return Ok(Decoded {
                books: Vec::new(),
                format: Format::Structured,
            });
        }

        let mut attempts = Vec::new();
        for parser in &self.parsers {
            match parser.parse(text) {
                Ok(books) => {
                    return Ok(Decoded {
                        books,
                        format: parser.format(),
                    })
                }
                Err(reason) => {
                    observer.notify(&StoreEvent::ParserRejected {
                        parser: parser.name(),
                        reason: reason.clone(),
                    });
                    attempts.push((parser.name(), reason));
                }
            }
        }

        Err(DecodeError { attempts })
    }

    /// Serialize books in the structured format.
    pub fn encode(&self, books: &[Book]) -> Result<String> {
        structured::encode(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NoopObserver, RecordingObserver};

    fn sample() -> Vec<Book> {
        vec![
            Book::new("Dune", "Herbert", "2020/01/01"),
            Book::new("1984", "Orwell", "2021/06/15"),
        ]
    }

    #[test]
    fn structured_round_trip_keeps_order() {
        let codec = Codec::default();
        let text = codec.encode(&sample()).unwrap();
        let decoded = codec.decode(&text, &NoopObserver).unwrap();
        assert_eq!(decoded.books, sample());
        assert_eq!(decoded.format, Format::Structured);
    }

    #[test]
    fn falls_back_to_legacy() {
        let codec = Codec::default();
        let text = "2020/01/01,Herbert,Dune\n2021/06/15,Orwell,1984\n";
        let decoded = codec.decode(text, &NoopObserver).unwrap();
        assert_eq!(decoded.books, sample());
        assert_eq!(decoded.format, Format::Legacy);
    }

    #[test]
    fn legacy_upgrade_survives_reload() {
        let codec = Codec::default();
        let legacy = codec
            .decode("2020/01/01,Herbert,Dune\n", &NoopObserver)
            .unwrap();
        let text = codec.encode(&legacy.books).unwrap();
        let reloaded = codec.decode(&text, &NoopObserver).unwrap();
        assert_eq!(reloaded.format, Format::Structured);
        assert_eq!(reloaded.books, legacy.books);
    }

    #[test]
    fn rejects_text_no_parser_understands() {
        let codec = Codec::default();
        let err = codec.decode("{not valid json", &NoopObserver).unwrap_err();
        let names: Vec<_> = err.attempts.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["structured", "legacy"]);
        assert!(err.to_string().contains("no known format matched"));
    }

    #[test]
    fn empty_text_is_an_empty_list() {
        let codec = Codec::default();
        let decoded = codec.decode("  \n", &NoopObserver).unwrap();
        assert!(decoded.books.is_empty());
    }

    #[test]
    fn reports_rejections_to_observer() {
        let codec = Codec::default();
        let observer = RecordingObserver::new();
        codec
            .decode("2020/01/01,Herbert,Dune", &observer)
            .unwrap();
        let events = observer.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            StoreEvent::ParserRejected {
                parser: "structured",
                ..
            }
        ));
    }

    #[test]
    fn parsers_are_tried_in_the_given_order() {
        let codec = Codec::new(vec![Box::new(LegacyParser)]);
        let text = Codec::default().encode(&sample()).unwrap();
        assert!(codec.decode(&text, &NoopObserver).is_err());
    }
}
