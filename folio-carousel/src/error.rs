use thiserror::Error;

/// Failures while deriving the carousel layout.
///
/// None of these cross the engine boundary: the engine records them as
/// `last_error` and keeps running.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CarouselError {
    #[error("carousel has no items")]
    EmptyCatalog,

    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("non-finite {field} for card at offset {offset}")]
    Geometry { field: &'static str, offset: i32 },

    #[error("carousel is unmounted")]
    Unmounted,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
