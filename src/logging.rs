//! Logger setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so it only logs
//! when given a file. The simulator logs to stderr.

use crate::error::Result;
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Send log records to `log_file`, filtered by `RUST_LOG` (default `info`).
/// Without a file no logger is installed and records are dropped.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis();
    install(builder);
    log::info!("logging to {}", path.display());
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `default_filter`).
pub fn init_stderr(default_filter: &str) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.target(Target::Stderr);
    install(builder);
}

fn install(mut builder: Builder) {
    // A second init (tests, embedding) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_file_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_init_with_file_creates_it() {
        let path = std::env::temp_dir().join("hurdle_logging_test.log");
        init(Some(&path)).expect("init should succeed");
        assert!(path.exists());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_init_unwritable_path_is_error() {
        let path = Path::new("/nonexistent-dir-12345/hurdle.log");
        assert!(init(Some(path)).is_err());
    }
}
