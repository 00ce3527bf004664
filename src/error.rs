use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangdevError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("no entry with id '{0}' in the catalog")]
    EntryNotFound(String),

    #[error("unknown operating system '{0}' (expected windows, mac or linux)")]
    UnknownOs(String),

    #[error("unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LangdevError>;
