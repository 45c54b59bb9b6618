use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocateError>;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("unsupported dataset tag `{0}`")]
    UnsupportedDataset(String),

    /// The recording file name does not carry a subject identifier as its
    /// third hyphen-delimited token.
    #[error("malformed recording file name: {0:?}")]
    MalformedFileName(PathBuf),

    #[error("no recordings found under {}", .0.display())]
    NoRecordingsFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
