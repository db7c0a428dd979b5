use booklist::model::{Field, DATE_FORMAT};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "booklist", version)]
#[command(about = "Keep a personal list of books in a plain file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// List file to use (defaults to the configured default-file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Date added, YYYY/MM/DD (defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<String>,

        /// Add even if the same title and author are already listed
        #[arg(long)]
        force: bool,
    },

    /// List books, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text matched against title, author and date
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Change one field of a book
    #[command(alias = "e")]
    Edit {
        /// Index of the book (as shown by `list`)
        index: String,

        /// Field to change: title, author or date
        field: Field,

        /// New value (may be empty)
        value: String,
    },

    /// Delete one or more books
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the books (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show how many books there are
    Count {
        /// Only count books matching this text
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Print the path of the list file in use
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (default-file, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| format!("expected a date like 2024/01/31, got {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::try_parse_from([
            "booklist",
            "-f",
            "books.json",
            "add",
            "Dune",
            "Frank Herbert",
            "--date",
            "2020/1/2",
            "--force",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("books.json")));
        match cli.command {
            Some(Commands::Add {
                title,
                author,
                date,
                force,
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(date.as_deref(), Some("2020/01/02"));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_dates() {
        let result = Cli::try_parse_from(["booklist", "add", "Dune", "Herbert", "-d", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_edit_field() {
        let cli = Cli::try_parse_from(["booklist", "edit", "2", "author", "Orwell"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Edit {
                field: Field::Author,
                ..
            })
        ));
        assert!(Cli::try_parse_from(["booklist", "edit", "2", "isbn", "x"]).is_err());
    }

    #[test]
    fn list_query_words_and_alias() {
        let cli = Cli::try_parse_from(["booklist", "ls", "frank", "herbert"]).unwrap();
        match cli.command {
            Some(Commands::List { query }) => assert_eq!(query, vec!["frank", "herbert"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn delete_requires_indexes() {
        assert!(Cli::try_parse_from(["booklist", "delete"]).is_err());
    }
}
