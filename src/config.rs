use crate::constants::*;
use crate::error::{DeckError, Result};

/// Behavior switches for a [`SlideDeck`](crate::SlideDeck).
///
/// Auto-rotation exists but is off unless explicitly enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub auto_rotate: bool,
    /// Seconds between automatic advances.
    pub interval: f32,
    pub pause_on_hover: bool,
    /// Horizontal travel a touch must exceed to count as a swipe.
    pub swipe_threshold: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            auto_rotate: false,
            interval: AUTO_ROTATE_INTERVAL,
            pause_on_hover: false,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl DeckConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.interval.is_finite() || self.interval < MIN_ROTATE_INTERVAL {
            return Err(DeckError::InvalidConfig(format!(
                "rotation interval must be at least {} seconds, got {}",
                MIN_ROTATE_INTERVAL, self.interval
            )));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(DeckError::InvalidConfig(format!(
                "swipe threshold must be zero or more pixels, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_rotation_disabled() {
        let config = DeckConfig::default();
        assert!(!config.auto_rotate);
        assert!(!config.pause_on_hover);
        assert_eq!(config.interval, 5.0);
        assert_eq!(config.swipe_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_interval() {
        for interval in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = DeckConfig { interval, ..DeckConfig::default() };
            assert!(matches!(config.validate(), Err(DeckError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_intervals_shorter_than_a_frame() {
        let tiny = DeckConfig { auto_rotate: true, interval: 1e-30, ..DeckConfig::default() };
        assert!(matches!(tiny.validate(), Err(DeckError::InvalidConfig(_))));

        let one_frame = DeckConfig { interval: MIN_ROTATE_INTERVAL, ..DeckConfig::default() };
        assert!(one_frame.validate().is_ok());
    }

    #[test]
    fn rejects_negative_threshold_but_allows_zero() {
        let negative = DeckConfig { swipe_threshold: -5.0, ..DeckConfig::default() };
        assert!(negative.validate().is_err());

        let zero = DeckConfig { swipe_threshold: 0.0, ..DeckConfig::default() };
        assert!(zero.validate().is_ok());
    }
}
