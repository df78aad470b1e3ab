use thiserror::Error;

/// Errors raised by the deck and the navigation controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Slide index {index} is out of range (deck has {count} slides)")]
    OutOfRange { index: usize, count: usize },

    #[error("Cannot navigate to slide {index}: valid range is 0..{count}")]
    InvalidIndex { index: usize, count: usize },

    #[error("Duplicate slide id: {0}")]
    DuplicateId(String),

    #[error("A deck needs at least one slide")]
    Empty,
}

pub type Result<T> = std::result::Result<T, DeckError>;
