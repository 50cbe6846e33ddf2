//! Error type shared by the library and both binaries.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong outside the game loop itself.
///
/// A collision is not an error: it is the normal `Playing -> GameOver`
/// transition and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum HurdleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HurdleError>;
