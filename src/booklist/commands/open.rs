use crate::codec::Format;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookStore, StorageBackend};
use std::path::Path;

/// Switch the store to another list file, flushing pending changes first.
pub fn run<B: StorageBackend>(store: &mut BookStore<B>, path: &Path) -> Result<CmdResult> {
    let flushed_from = if store.has_unsaved_changes() {
        store.current_file().map(Path::to_path_buf)
    } else {
        None
    };

    let format = store.load(path)?;
    let mut result = CmdResult::default().with_file(path.to_path_buf());

    if let Some(previous) = flushed_from {
        result.add_message(CmdMessage::info(format!(
            "Saved pending changes to {}",
            previous.display()
        )));
    }
    if format == Format::Legacy {
        result.add_message(CmdMessage::info(
            "Old comma-separated list; it will be rewritten in the current format on save",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Opened {} ({} books)",
        path.display(),
        store.len()
    )));

    Ok(result)
}
