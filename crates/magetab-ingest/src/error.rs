use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("SDRF file {name} not found under {dir}")]
    SdrfNotFound { name: String, dir: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
