use crate::state::SwipeDirection;

/// Pairs a touch start with the following touch end and classifies the
/// horizontal travel between them.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start_x: None }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture started by [`begin`](Self::begin).
    ///
    /// Travel of at most `threshold` is a tap and yields `None`, as does an
    /// end with no recorded start.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() <= self.threshold {
            return None;
        }
        if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_below_threshold_is_a_tap() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(151.0), None);
        swipe.begin(200.0);
        assert_eq!(swipe.end(249.0), None);
    }

    #[test]
    fn travel_exactly_at_threshold_is_a_tap() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(150.0), None);
    }

    #[test]
    fn right_to_left_goes_forward() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(149.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn left_to_right_goes_back() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.end(251.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.end(0.0), None);

        // A completed gesture does not leak into the next one
        swipe.begin(300.0);
        assert_eq!(swipe.end(100.0), Some(SwipeDirection::Next));
        assert_eq!(swipe.end(0.0), None);
    }
}
