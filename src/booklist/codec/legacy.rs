use super::{BookParser, Format};
use crate::model::{Book, DATE_FORMAT};
use chrono::NaiveDate;

/// Reads the old `date,author,title` line format.
///
/// Fields are not escaped, so a title or author containing a comma does not
/// split into exactly three fields and the whole file is rejected.
pub struct LegacyParser;

impl BookParser for LegacyParser {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn format(&self) -> Format {
        Format::Legacy
    }

    fn parse(&self, text: &str) -> std::result::Result<Vec<Book>, String> {
        let mut books = Vec::new();

        for (num, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            let [date, author, title] = fields.as_slice() else {
                return Err(format!(
                    "line {}: expected 3 comma-separated fields, found {}",
                    num + 1,
                    fields.len()
                ));
            };

            let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
                .map_err(|e| format!("line {}: invalid date {:?}: {}", num + 1, date, e))?;

            books.push(Book::new(
                *title,
                *author,
                date.format(DATE_FORMAT).to_string(),
            ));
        }

        Ok(books)
    }
}
