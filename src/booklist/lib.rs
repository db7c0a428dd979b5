//! # Booklist Architecture
//!
//! Booklist is a **UI-agnostic library** for keeping a personal list of books
//! (title, author, date added) in a single plain file. The command-line
//! binary is one client of it; a desktop or web front end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → BookRefs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Policy (duplicate override, exit rules) and messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/) + Codec (codec/) + Filter (filter.rs)       │
//! │  - BookStore owns the records and their invariants          │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go to an injected [`observer::StoreObserver`].
//! Everything is single-threaded and synchronous.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: The record store and storage backends
//! - [`codec`]: Structured and legacy file formats
//! - [`filter`]: Case-insensitive search projection
//! - [`index`]: Display indexes (1, 2, 3-5)
//! - [`model`]: `Book`, `BookRef`, `Field`
//! - [`observer`]: Store events and observers
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod observer;
pub mod store;
