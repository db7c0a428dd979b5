use super::{BookParser, Format};
use crate::error::{BookListError, Result};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b" ";

pub struct StructuredParser;

impl BookParser for StructuredParser {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn format(&self) -> Format {
        Format::Structured
    }

    fn parse(&self, text: &str) -> std::result::Result<Vec<Book>, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}

pub fn encode(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    books
        .serialize(&mut ser)
        .map_err(BookListError::Serialization)?;
    buf.push(b'\n');
    // serde_json only ever emits UTF-8.
    String::from_utf8(buf).map_err(|e| BookListError::Api(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_space_indent_in_field_order() {
        let text = encode(&[Book::new("Dune", "Herbert", "2020/01/01")]).unwrap();
        assert_eq!(
            text,
            "[\n {\n  \"title\": \"Dune\",\n  \"author\": \"Herbert\",\n  \"date\": \"2020/01/01\"\n }\n]\n"
        );
    }

    #[test]
    fn empty_list_encodes_as_empty_array() {
        assert_eq!(encode(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn commas_and_quotes_survive() {
        let book = Book::new("Gödel, Escher, Bach", "Hofstadter, \"Doug\"", "2019/03/02");
        let text = encode(std::slice::from_ref(&book)).unwrap();
        assert_eq!(StructuredParser.parse(&text).unwrap(), vec![book]);
    }

    #[test]
    fn rejects_objects_missing_fields() {
        let err = StructuredParser
            .parse(r#"[{"title": "Dune", "author": "Herbert"}]"#)
            .unwrap_err();
        assert!(err.contains("date"));
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(StructuredParser.parse(r#"{"title": "Dune"}"#).is_err());
    }
}
