use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Date format used everywhere a book's date is rendered or parsed.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Today's local date as a `YYYY/MM/DD` string.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// A single entry in the list.
///
/// The date is kept as text exactly as it appears on disk. Field order here
/// is the field order of the structured file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub date: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Date => &self.date,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::Date => self.date = value,
        }
    }

    /// Case-insensitive match on title and author, used for duplicate checks.
    pub fn same_work(&self, title: &str, author: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
            && self.author.to_lowercase() == author.to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.date, self.author, self.title)
    }
}

/// Opaque handle to a book held by a store.
///
/// Two books with identical fields still get distinct refs, and a ref never
/// points at a different book after other books are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookRef(Uuid);

impl BookRef {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An editable column of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Date,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Date];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" | "t" => Ok(Field::Title),
            "author" | "a" => Ok(Field::Author),
            "date" | "d" => Ok(Field::Date),
            _ => Err(format!(
                "Unknown field: {} (expected title, author or date)",
                s
            )),
        }
    }
}
