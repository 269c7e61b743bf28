/// Swipe recognizer for a single card, kept free of DOM types so it can be
/// driven by pointer events in the app and by plain coordinates in tests.
///
/// Lifecycle: `begin` on pointer-down, `update` per pointer-move (yields the
/// visual transform for the drag), `finish` on pointer-up (classifies the
/// gesture). A `finish` or `update` without a preceding `begin` is a no-op.

/// Horizontal travel past which a release commits a decision.
pub const COMMIT_THRESHOLD: f64 = 100.0;

/// One degree of tilt per 20px of horizontal travel.
const ROTATE_DIVISOR: f64 = 20.0;
/// Distance over which opacity fades, capped so it never drops below 0.5.
const FADE_DISTANCE: f64 = 280.0;
const MAX_FADE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Like,
    Pass,
    Revert,
}

/// Visual feedback for an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub dx: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

#[derive(Debug)]
struct Drag {
    start_x: f64,
    current_x: f64,
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    drag: Option<Drag>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin(&mut self, x: f64) {
        self.drag = Some(Drag {
            start_x: x,
            current_x: x,
        });
    }

    pub fn update(&mut self, x: f64) -> Option<CardTransform> {
        let drag = self.drag.as_mut()?;
        drag.current_x = x;
        let dx = drag.current_x - drag.start_x;
        Some(CardTransform {
            dx,
            rotate_deg: dx / ROTATE_DIVISOR,
            opacity: 1.0 - (dx.abs() / FADE_DISTANCE).min(MAX_FADE),
        })
    }

    pub fn finish(&mut self) -> Option<SwipeOutcome> {
        let drag = self.drag.take()?;
        let dx = drag.current_x - drag.start_x;
        Some(if dx > COMMIT_THRESHOLD {
            SwipeOutcome::Like
        } else if dx < -COMMIT_THRESHOLD {
            SwipeOutcome::Pass
        } else {
            SwipeOutcome::Revert
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f64, to: f64) -> Option<SwipeOutcome> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(from);
        tracker.update(to);
        tracker.finish()
    }

    #[test]
    fn release_past_threshold_commits() {
        assert_eq!(swipe(0.0, 150.0), Some(SwipeOutcome::Like));
        assert_eq!(swipe(0.0, -150.0), Some(SwipeOutcome::Pass));
        assert_eq!(swipe(0.0, 50.0), Some(SwipeOutcome::Revert));
        assert_eq!(swipe(200.0, 150.0), Some(SwipeOutcome::Revert));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(swipe(0.0, 100.0), Some(SwipeOutcome::Revert));
        assert_eq!(swipe(0.0, 100.5), Some(SwipeOutcome::Like));
        assert_eq!(swipe(0.0, -100.0), Some(SwipeOutcome::Revert));
    }

    #[test]
    fn drag_transform_tracks_offset() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(10.0);
        let t = tracker.update(70.0).unwrap();
        assert_eq!(t.dx, 60.0);
        assert_eq!(t.rotate_deg, 3.0);
        assert!((t.opacity - (1.0 - 60.0 / 280.0)).abs() < 1e-9);
    }

    #[test]
    fn opacity_never_drops_below_half() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0);
        let t = tracker.update(-1000.0).unwrap();
        assert_eq!(t.opacity, 0.5);
    }

    #[test]
    fn events_without_begin_are_no_ops() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.update(50.0), None);
        assert_eq!(tracker.finish(), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn tracker_is_reusable_after_finish() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0);
        tracker.update(40.0);
        assert_eq!(tracker.finish(), Some(SwipeOutcome::Revert));
        assert_eq!(tracker.finish(), None);

        tracker.begin(0.0);
        tracker.update(180.0);
        assert_eq!(tracker.finish(), Some(SwipeOutcome::Like));
    }
}
