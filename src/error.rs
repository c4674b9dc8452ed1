use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the binary and the configuration layer.
///
/// The simulation itself never fails; everything here comes from the
/// terminal, the filesystem, or user input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid hex color {0:?}, expected RRGGBB (e.g. 1a1b26)")]
    InvalidColor(String),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
