//! Pure gesture classification helpers shared by the recognizer.
//!
//! Everything here is plain math over displacements and elapsed times, so
//! the threshold rules stay testable without a DOM.

use crate::config::Thresholds;

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Swipe(SwipeDirection),
    Tap,
    DoubleTap,
    LongPress,
    /// Current two-finger distance ratio relative to the contact baseline.
    Pinch(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Outcome of classifying a finished single-finger interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    Swipe(SwipeDirection),
    /// Small and quick; may still become a tap or double tap.
    TapCandidate,
    /// Neither fast-and-far nor small-and-quick. Deliberately nothing.
    None,
}

/// Dominant-axis swipe direction. Equal magnitudes resolve to horizontal;
/// the tie-break is arbitrary but must stay deterministic.
pub fn swipe_direction(dx: f64, dy: f64) -> SwipeDirection {
    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    }
}

/// Classify the end of an interaction from its total displacement and
/// duration. Swipe wins over tap; anything slow or mid-sized is `None`.
pub fn classify_release(dx: f64, dy: f64, elapsed_ms: f64, t: &Thresholds) -> Release {
    let distance = (dx * dx + dy * dy).sqrt();
    if distance > t.swipe_threshold && elapsed_ms < t.swipe_max_duration_ms {
        Release::Swipe(swipe_direction(dx, dy))
    } else if distance < t.tap_max_jitter && elapsed_ms < t.tap_max_duration_ms {
        Release::TapCandidate
    } else {
        Release::None
    }
}

/// Euclidean distance between two touch points.
pub fn touch_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_directions() {
        assert_eq!(swipe_direction(-70.0, 0.0), SwipeDirection::Left);
        assert_eq!(swipe_direction(70.0, 0.0), SwipeDirection::Right);
        assert_eq!(swipe_direction(0.0, -70.0), SwipeDirection::Up);
        assert_eq!(swipe_direction(0.0, 70.0), SwipeDirection::Down);
    }

    #[test]
    fn equal_magnitudes_resolve_horizontal() {
        assert_eq!(swipe_direction(60.0, 60.0), SwipeDirection::Right);
        assert_eq!(swipe_direction(-60.0, 60.0), SwipeDirection::Left);
        assert_eq!(swipe_direction(-60.0, -60.0), SwipeDirection::Left);
    }

    #[test]
    fn diagonal_favors_dominant_axis() {
        assert_eq!(swipe_direction(30.0, 80.0), SwipeDirection::Down);
        assert_eq!(swipe_direction(-80.0, 30.0), SwipeDirection::Left);
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let t = Thresholds::default();
        // exactly at the threshold: not a swipe, and too big for a tap
        assert_eq!(classify_release(50.0, 0.0, 100.0, &t), Release::None);
        assert_eq!(
            classify_release(50.1, 0.0, 100.0, &t),
            Release::Swipe(SwipeDirection::Right)
        );
    }

    #[test]
    fn slow_swipe_is_nothing() {
        let t = Thresholds::default();
        assert_eq!(classify_release(200.0, 0.0, 600.0, &t), Release::None);
    }

    #[test]
    fn small_quick_touch_is_tap_candidate() {
        let t = Thresholds::default();
        assert_eq!(classify_release(3.0, -4.0, 80.0, &t), Release::TapCandidate);
    }

    #[test]
    fn small_slow_touch_is_nothing() {
        let t = Thresholds::default();
        assert_eq!(classify_release(3.0, 0.0, 900.0, &t), Release::None);
    }

    #[test]
    fn midsized_drag_is_nothing() {
        let t = Thresholds::default();
        // 30px in 100ms: beyond tap jitter, below swipe threshold
        assert_eq!(classify_release(30.0, 0.0, 100.0, &t), Release::None);
    }

    #[test]
    fn touch_distance_is_euclidean() {
        assert_eq!(touch_distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(touch_distance((10.0, 10.0), (10.0, 10.0)), 0.0);
    }
}
