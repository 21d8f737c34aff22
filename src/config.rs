// Configuration consumed by attach_listeners: callbacks + tuning thresholds.
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::haptics::Haptics;

/// Distance/time tuning for gesture classification.
///
/// All fields have sensible defaults; serde support lets callers persist a
/// tuned set (e.g. in local storage) and restore it with `#[serde(default)]`
/// filling anything missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum straight-line displacement (px, exclusive) for a swipe.
    pub swipe_threshold: f64,
    /// Maximum displacement (px, exclusive) still counting as a stationary tap.
    pub tap_max_jitter: f64,
    /// Minimum `|scale - 1|` before a pinch event is emitted.
    pub pinch_threshold: f64,
    /// Swipes slower than this are ignored (ms).
    pub swipe_max_duration_ms: f64,
    /// Taps held longer than this are ignored (ms).
    pub tap_max_duration_ms: f64,
    /// Hold-still duration before a long press fires (ms).
    pub long_press_delay_ms: u32,
    /// Window between two taps that merges them into a double tap (ms).
    pub double_tap_delay_ms: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            tap_max_jitter: 10.0,
            pinch_threshold: 0.1,
            swipe_max_duration_ms: 500.0,
            tap_max_duration_ms: 500.0,
            long_press_delay_ms: 500,
            double_tap_delay_ms: 300,
        }
    }
}

/// Gesture callbacks and thresholds for one attachment.
///
/// Every callback is optional; classification work tied to an absent
/// callback is skipped (no long-press timer without `on_long_press`, no
/// two-finger math without `on_pinch`).
#[derive(Default)]
pub struct GestureConfig {
    pub on_swipe_left: Option<Box<dyn Fn()>>,
    pub on_swipe_right: Option<Box<dyn Fn()>>,
    pub on_swipe_up: Option<Box<dyn Fn()>>,
    pub on_swipe_down: Option<Box<dyn Fn()>>,
    pub on_tap: Option<Box<dyn Fn()>>,
    pub on_double_tap: Option<Box<dyn Fn()>>,
    pub on_long_press: Option<Box<dyn Fn()>>,
    /// Receives the current two-finger distance ratio (>1 spread, <1 squeeze).
    pub on_pinch: Option<Box<dyn Fn(f64)>>,
    pub thresholds: Thresholds,
    /// Haptic backend; `WebHaptics` (navigator.vibrate) when unset.
    pub haptics: Option<Rc<dyn Haptics>>,
}

impl GestureConfig {
    pub(crate) fn wants_long_press(&self) -> bool {
        self.on_long_press.is_some()
    }

    pub(crate) fn wants_pinch(&self) -> bool {
        self.on_pinch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let t = Thresholds::default();
        assert_eq!(t.swipe_threshold, 50.0);
        assert_eq!(t.tap_max_jitter, 10.0);
        assert_eq!(t.pinch_threshold, 0.1);
        assert_eq!(t.swipe_max_duration_ms, 500.0);
        assert_eq!(t.tap_max_duration_ms, 500.0);
        assert_eq!(t.long_press_delay_ms, 500);
        assert_eq!(t.double_tap_delay_ms, 300);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let t: Thresholds = serde_json::from_str(r#"{"swipe_threshold": 100.0}"#).unwrap();
        assert_eq!(t.swipe_threshold, 100.0);
        assert_eq!(t.double_tap_delay_ms, 300);
    }

    #[test]
    fn empty_config_wants_nothing() {
        let cfg = GestureConfig::default();
        assert!(!cfg.wants_long_press());
        assert!(!cfg.wants_pinch());
        assert!(cfg.on_tap.is_none());
    }
}
