use crate::constants::MIN_ROTATE_INTERVAL;
use crate::state::RotationState;

/// Repeating advance timer driven by frame deltas.
///
/// A disabled timer can never be armed. Starting an armed timer keeps its
/// pending tick; stopping discards it.
#[derive(Debug, Clone)]
pub struct AutoRotate {
    enabled: bool,
    interval: f32,
    state: RotationState,
}

impl AutoRotate {
    pub fn new(enabled: bool, interval: f32) -> Self {
        // Shorter than a frame (or NaN) would fire on every frame, or never
        let usable = interval.is_finite() && interval >= MIN_ROTATE_INTERVAL;
        Self {
            enabled: enabled && usable,
            interval,
            state: RotationState::Stopped,
        }
    }

    /// Arms the timer. Returns whether the timer is running afterwards.
    pub fn start(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.state == RotationState::Stopped {
            self.state = RotationState::Running { elapsed: 0.0 };
        }
        true
    }

    pub fn stop(&mut self) {
        self.state = RotationState::Stopped;
    }

    /// Advances the armed timer by `dt` seconds and returns how many
    /// intervals elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let RotationState::Running { elapsed } = self.state else {
            return 0;
        };
        let elapsed = elapsed + dt.max(0.0);
        if !elapsed.is_finite() {
            self.state = RotationState::Running { elapsed: 0.0 };
            return 0;
        }
        // Float to int casts saturate
        let fired = (elapsed / self.interval).floor() as u32;
        self.state = RotationState::Running { elapsed: elapsed % self.interval };
        fired
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RotationState::Running { .. })
    }

    pub fn state(&self) -> RotationState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_never_arms() {
        let mut rotation = AutoRotate::new(false, 5.0);
        assert!(!rotation.start());
        assert!(!rotation.is_running());
        assert_eq!(rotation.advance(100.0), 0);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut rotation = AutoRotate::new(true, 5.0);
        assert!(rotation.start());
        assert_eq!(rotation.advance(2.5), 0);
        assert_eq!(rotation.advance(2.5), 1);
        assert_eq!(rotation.advance(4.0), 0);
        assert_eq!(rotation.advance(11.0), 3);
    }

    #[test]
    fn repeated_start_keeps_the_pending_tick() {
        let mut rotation = AutoRotate::new(true, 5.0);
        rotation.start();
        rotation.advance(4.0);
        rotation.start();
        rotation.start();
        assert_eq!(rotation.state(), RotationState::Running { elapsed: 4.0 });
        assert_eq!(rotation.advance(1.0), 1);
    }

    #[test]
    fn stop_discards_pending_time() {
        let mut rotation = AutoRotate::new(true, 5.0);
        rotation.start();
        rotation.advance(4.5);
        rotation.stop();
        assert_eq!(rotation.state(), RotationState::Stopped);
        assert_eq!(rotation.advance(10.0), 0);

        rotation.start();
        assert_eq!(rotation.advance(4.5), 0);
    }

    #[test]
    fn unusable_interval_disables_rotation() {
        assert!(!AutoRotate::new(true, 0.0).is_enabled());
        assert!(!AutoRotate::new(true, 1e-30).is_enabled());
        assert!(!AutoRotate::new(true, f32::NAN).is_enabled());
        assert!(AutoRotate::new(true, 0.5).is_enabled());
    }

    #[test]
    fn huge_frame_gaps_return_promptly() {
        let mut rotation = AutoRotate::new(true, MIN_ROTATE_INTERVAL);
        rotation.start();
        assert_eq!(rotation.advance(f32::MAX), u32::MAX);
        assert!(rotation.is_running());
        assert_eq!(rotation.advance(f32::INFINITY), 0);
        assert_eq!(rotation.state(), RotationState::Running { elapsed: 0.0 });
    }
}
