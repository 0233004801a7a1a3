use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("unknown note field: {0}")]
    UnknownNoteField(String),
}
