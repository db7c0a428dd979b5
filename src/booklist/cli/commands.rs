//! # CLI Layer
//!
//! This module is **one possible UI client** for booklist, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! Every invocation is a short session: resolve the list file, open it through
//! [`BookListApi::switch_file`], apply one command, then close the session so
//! pending changes reach the file.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::logging;
use super::print::{print_books, print_config, print_counts, print_messages};
use super::setup::{Cli, Commands};
use booklist::api::{BookListApi, ConfigAction, MessageLevel};
use booklist::config::BookListConfig;
use booklist::error::{BookListError, Result};
use booklist::model::Field;
use booklist::observer::LogObserver;
use booklist::store::fs_backend::FsBackend;
use booklist::store::BookStore;
use clap::Parser;
use std::path::PathBuf;

struct AppContext {
    api: BookListApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = BookListConfig::dir()?;
    let config = BookListConfig::load(&config_dir)?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let _logger = logging::init(level);

    // Config commands never touch a list file
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(config_dir, key, value);
    }

    let file = cli
        .file
        .or(config.default_file)
        .ok_or(BookListError::NoFileSelected)?;

    if let Some(Commands::Path) = cli.command {
        println!("{}", file.display());
        return Ok(());
    }

    let mut ctx = init_context(config_dir, file)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            date,
            force,
        }) => handle_add(&mut ctx, title, author, date, force),
        Some(Commands::List { query }) => handle_list(&ctx, query),
        Some(Commands::Edit {
            index,
            field,
            value,
        }) => handle_edit(&mut ctx, index, field, value),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Count { query }) => handle_count(&ctx, query),
        None => handle_list(&ctx, Vec::new()),
        Some(Commands::Path) | Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_context(config_dir: PathBuf, file: PathBuf) -> Result<AppContext> {
    let store = BookStore::new(FsBackend::new()).with_observer(Box::new(LogObserver));
    let mut api = BookListApi::new(store, config_dir);

    let result = api.switch_file(&file)?;
    log::debug!("{} messages from opening {}", result.messages.len(), file.display());
    // Only the legacy-format notice is worth showing on every run
    let notices: Vec<_> = result
        .messages
        .into_iter()
        .filter(|m| m.level != MessageLevel::Success)
        .collect();
    print_messages(&notices);

    Ok(AppContext { api })
}

fn finish(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.close(false)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    date: Option<String>,
    force: bool,
) -> Result<()> {
    let result = ctx.api.add_record(&title, &author, date.as_deref(), force)?;
    print_messages(&result.messages);
    if !result.affected_books.is_empty() {
        finish(ctx)?;
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let result = ctx.api.list_records(&query.join(" "))?;
    print_books(&result.listed_books);
    if let Some(counts) = &result.counts {
        print_counts(counts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, field: Field, value: String) -> Result<()> {
    let ids = ctx.api.resolve_indexes(&[index])?;
    for id in ids {
        let result = ctx.api.edit_field(id, field, &value)?;
        print_messages(&result.messages);
    }
    finish(ctx)
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let ids = ctx.api.resolve_indexes(&indexes)?;
    let result = ctx.api.delete_records(&ids)?;
    print_messages(&result.messages);
    finish(ctx)
}

fn handle_count(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let counts = ctx.api.record_count(&query.join(" "));
    print_counts(&counts);
    Ok(())
}

fn handle_config(config_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let is_show_all = matches!(action, ConfigAction::ShowAll);

    let store = BookStore::new(FsBackend::new());
    let api = BookListApi::new(store, config_dir);
    let result = api.config(action)?;

    if is_show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
