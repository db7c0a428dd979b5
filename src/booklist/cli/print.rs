use booklist::api::{CmdMessage, MessageLevel, RecordCounts};
use booklist::config::BookListConfig;
use booklist::index::DisplayBook;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 10;
const AUTHOR_WIDTH: usize = 28;
const NEW_MARKER: &str = "+";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_books(books: &[DisplayBook]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    let idx_width = books
        .iter()
        .map(|db| format!("{}. ", db.index).width())
        .max()
        .unwrap_or(0);
    // marker + index + title + gap + author + gap + date
    let title_width = LINE_WIDTH
        .saturating_sub(2 + idx_width + 2 + AUTHOR_WIDTH + 2 + DATE_WIDTH);

    for db in books {
        let marker = if db.is_new { NEW_MARKER } else { " " };
        let idx_str = format!("{}. ", db.index);
        let title = pad_to_width(&truncate_to_width(&db.book.title, title_width), title_width);
        let author = pad_to_width(&truncate_to_width(&db.book.author, AUTHOR_WIDTH), AUTHOR_WIDTH);

        let line = format!(
            "{} {:>iw$}{}  {}  {}",
            marker,
            idx_str,
            title,
            author,
            db.book.date,
            iw = idx_width
        );

        if db.is_new {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_counts(counts: &RecordCounts) {
    let line = if counts.filtered_count == counts.total {
        format!("{} books ({} new)", counts.total, counts.new_count)
    } else {
        format!(
            "{} books ({} new, {} shown)",
            counts.total, counts.new_count, counts.filtered_count
        )
    };
    println!("{}", line.dimmed());
}

pub(super) fn print_config(config: &BookListConfig) {
    for key in BookListConfig::KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key.bold(), value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_untouched() {
        assert_eq!(truncate_to_width("Dune", 10), "Dune");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        let out = truncate_to_width("The Left Hand of Darkness", 10);
        assert_eq!(out, "The Left …");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_to_width("吾輩は猫である", 6);
        assert_eq!(out.width(), 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("猫", 4), "猫  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
