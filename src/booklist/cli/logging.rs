use flexi_logger::{Logger, LoggerHandle};

/// Start stderr logging. `RUST_LOG` wins over `level` when set.
///
/// The handle must stay alive for as long as logging is wanted.
pub(super) fn init(level: &str) -> Option<LoggerHandle> {
    match Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    }
}
