use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut BookStore<B>) -> Result<CmdResult> {
    store.save()?;

    let mut result = CmdResult::default();
    if let Some(path) = store.current_file() {
        result.add_message(CmdMessage::success(format!(
            "Saved {} books to {}",
            store.len(),
            path.display()
        )));
        result = result.with_file(path.to_path_buf());
    }
    Ok(result)
}
