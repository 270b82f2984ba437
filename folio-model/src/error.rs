use thiserror::Error;

use crate::ids::ItemId;

/// Errors produced by catalog constructors and validation routines.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item id must not be empty")]
    EmptyId,

    #[error("duplicate item id `{0}`")]
    DuplicateId(ItemId),

    #[error("item `{id}` is missing a {field}")]
    MissingField { id: ItemId, field: &'static str },

    #[error("invalid {field} link on `{id}`: {source}")]
    InvalidLink {
        id: ItemId,
        field: &'static str,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
