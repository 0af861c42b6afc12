use crate::model::RecordId;
use std::fmt;
use thiserror::Error;

/// A required command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Operation,
    FileName,
    Item,
    Id,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flag::Operation => "operation",
            Flag::FileName => "fileName",
            Flag::Item => "item",
            Flag::Id => "id",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("-{0} flag has to be specified")]
    MissingFlag(Flag),

    #[error("Operation {0} not allowed!")]
    UnsupportedOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode item: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cannot parse data from JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("cannot encode records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Item with id {0} already exists")]
    DuplicateId(RecordId),
}

pub type Result<T> = std::result::Result<T, UserStoreError>;
