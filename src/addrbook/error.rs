use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    /// Adding (or constructing with) a record equal to one already stored.
    #[error("Operation would result in duplicate persons")]
    DuplicateRecord,

    /// No stored record carries the name an edit targets.
    #[error("No person with that name exists in the address book")]
    NoSuchRecord,

    /// No stored record is equal to the one being removed.
    #[error("Person could not be found in address book")]
    RecordNotFound,

    /// An edit found the record still borrowed through a `ContactRef`.
    #[error("Person is being read elsewhere and cannot be edited now")]
    RecordInUse,

    #[error("Index {index} is out of range (the last shown list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    IllegalValue(String),

    #[error("Invalid command format!\n{0}")]
    InvalidCommand(String),

    #[error("Storage file should end with '.json': {0}")]
    InvalidStoragePath(PathBuf),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AddrBookError {
    /// True for errors caused by the command a user typed, as opposed to
    /// failures of the environment (disk, corrupt data).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AddrBookError::DuplicateRecord
                | AddrBookError::NoSuchRecord
                | AddrBookError::RecordNotFound
                | AddrBookError::IndexOutOfRange { .. }
                | AddrBookError::IllegalValue(_)
                | AddrBookError::InvalidCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
