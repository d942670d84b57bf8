use crate::model::CarparkCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarparkError {
    #[error("This car park already exists in the car park list: {0}")]
    DuplicateCarpark(CarparkCode),

    #[error("Car park not found: {0}")]
    CarparkNotFound(CarparkCode),

    #[error("No more commands to undo!")]
    NoEarlierState,

    #[error("No more commands to redo!")]
    NoLaterState,

    #[error("No previous command in history")]
    NoPreviousHistory,

    #[error("No next command in history")]
    NoNextHistory,

    #[error("The draft can only be changed while it is the current history entry")]
    NotAtDraft,

    #[error("The car park index provided is invalid: {index} (list has {len} car parks)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error("At least one filter criterion must be provided.")]
    EmptyFilter,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for CarparkError {
    fn from(err: confique::Error) -> Self {
        CarparkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CarparkError>;
