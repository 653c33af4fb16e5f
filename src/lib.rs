//! Gallery slider core: an ordered deck of slides with one active slide,
//! driven by controls, indicators, arrow keys, swipes and an optional
//! rotation timer.
//!
//! Slides and indicators are capabilities ([`Slide`], [`Indicator`],
//! [`IndicatorHost`]) so the deck runs against any display surface.

pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod rotation;
pub mod state;
pub mod swipe;

pub use config::DeckConfig;
pub use deck::{Indicator, IndicatorHost, NoIndicator, Slide, SlideDeck};
pub use error::{DeckError, Result};
pub use input::{ArrowKey, DeckInput};
pub use rotation::AutoRotate;
pub use state::{RotationState, SwipeDirection};
pub use swipe::SwipeTracker;
