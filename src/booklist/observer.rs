//! # Store Events
//!
//! The store and codec never print and never touch a global logger. Anything
//! worth recording is emitted as a [`StoreEvent`] to the [`StoreObserver`]
//! handed to the store at construction.
//!
//! - [`NoopObserver`]: the default, drops everything.
//! - [`LogObserver`]: forwards events to the `log` facade, for the binary.
//! - [`RecordingObserver`]: keeps events in memory, for tests.

use crate::codec::Format;
use crate::model::{Book, BookRef, Field};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loaded {
        path: PathBuf,
        format: Format,
        count: usize,
    },
    ParserRejected {
        parser: &'static str,
        reason: String,
    },
    Added {
        id: BookRef,
        book: Book,
    },
    Edited {
        id: BookRef,
        field: Field,
        value: String,
    },
    Deleted {
        id: BookRef,
        book: Book,
    },
    Saved {
        path: PathBuf,
        count: usize,
    },
    Flushed {
        path: PathBuf,
    },
}

pub trait StoreObserver {
    fn notify(&self, event: &StoreEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn notify(&self, _event: &StoreEvent) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl StoreObserver for LogObserver {
    fn notify(&self, event: &StoreEvent) {
        match event {
            StoreEvent::Loaded {
                path,
                format,
                count,
            } => info!(
                "event=list_loaded path={} format={} count={}",
                path.display(),
                format,
                count
            ),
            StoreEvent::ParserRejected { parser, reason } => {
                warn!("event=parser_rejected parser={} reason={}", parser, reason)
            }
            StoreEvent::Added { id, book } => debug!("event=book_added id={} book={}", id, book),
            StoreEvent::Edited { id, field, value } => debug!(
                "event=book_edited id={} field={} value={:?}",
                id, field, value
            ),
            StoreEvent::Deleted { id, book } => {
                debug!("event=book_deleted id={} book={}", id, book)
            }
            StoreEvent::Saved { path, count } => {
                info!("event=list_saved path={} count={}", path.display(), count)
            }
            StoreEvent::Flushed { path } => {
                info!("event=list_flushed path={}", path.display())
            }
        }
    }
}

/// Keeps every event it sees. Single-threaded, like the store itself.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<StoreEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.borrow().clone()
    }
}

impl StoreObserver for RecordingObserver {
    fn notify(&self, event: &StoreEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<T: StoreObserver + ?Sized> StoreObserver for std::rc::Rc<T> {
    fn notify(&self, event: &StoreEvent) {
        (**self).notify(event)
    }
}
