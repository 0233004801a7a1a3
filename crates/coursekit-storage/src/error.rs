use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stored value for key {key} could not be decoded: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage read failed for key {key}: {message}")]
    Read { key: String, message: String },

    #[error("storage write failed for key {key}: {message}")]
    Write { key: String, message: String },

    #[error("storage remove failed for key {key}: {message}")]
    Remove { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
