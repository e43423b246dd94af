use std::path::PathBuf;
use thiserror::Error;

/// Failures of the key-value persistence port
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store path has no parent directory: {0}")]
    NoParent(PathBuf),
}
