//! Errors for the fallible edges of the crate.
//!
//! Rendering itself never fails; only loading config and moving bytes in and
//! out of files can.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read {input}: {source}")]
    ReadInput {
        input: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {output}: {source}")]
    WriteOutput {
        output: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
