// Per-attachment gesture session state.
//
// One TouchSession per attached element; fields are overwritten at every
// touchstart rather than the record being reallocated. `last_tap_time` is
// the one field that must survive the reset: a double tap spans two
// separate start→end interactions.
#[derive(Debug, Clone, Default)]
pub struct TouchSession {
    pub start_x: f64,
    pub start_y: f64,
    pub start_time: f64,
    /// End time of the most recent tap candidate; cleared when a double tap
    /// consumes it or the deferred single tap fires.
    pub last_tap_time: Option<f64>,
    /// Two-finger distance recorded when the second finger joined; the
    /// pinch scale is measured against this. Recomputed on every 1→2
    /// finger transition.
    pub pinch_baseline: Option<f64>,
    /// True from touchstart until the interaction has been classified
    /// (touchend ran, long press fired, or the touch was cancelled).
    pub active: bool,
    /// Mirrors whether a long-press timer is outstanding for this session.
    pub long_press_armed: bool,
}

impl TouchSession {
    /// Reset for a new interaction starting at (x, y).
    pub fn begin(&mut self, x: f64, y: f64, now: f64) {
        self.start_x = x;
        self.start_y = y;
        self.start_time = now;
        self.pinch_baseline = None;
        self.active = true;
        // last_tap_time deliberately kept
    }
}
