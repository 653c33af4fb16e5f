use thiserror::Error;

/// Errors reported by the slide deck and its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    /// `show_slide` was asked for a slide the deck does not have.
    #[error("slide index {index} is out of range for a deck of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// The indicator container could not produce an indicator.
    #[error("indicator unavailable: {0}")]
    IndicatorUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
