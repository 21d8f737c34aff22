//! Gesture recognizer state machine.
//!
//! Consumes touch events with explicit timestamps and returns the effects
//! the engine should perform (emit a gesture, fire the haptic port, start
//! or cancel a timer). Keeping the machine free of DOM and timer handles
//! means every disambiguation rule is testable by driving it by hand.

use crate::classify::{self, Gesture, Release};
use crate::config::Thresholds;
use crate::haptics::HapticIntensity;
use crate::state::TouchSession;

/// Side effects requested by the recognizer, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Emit(Gesture),
    Haptic(HapticIntensity),
    StartLongPress {
        delay_ms: u32,
    },
    CancelLongPress,
    /// Defer a single tap until the double-tap window has elapsed.
    /// `tap_time` is handed back through `tap_timer_fired` so a stale timer
    /// can recognize it has been superseded.
    StartTapTimer {
        delay_ms: u32,
        tap_time: f64,
    },
    CancelTapTimer,
}

/// One recognizer per attachment. Timestamps are milliseconds on whatever
/// monotonic-enough clock the caller uses (`js_sys::Date::now()` in the
/// browser engine, hand-written values in tests).
#[derive(Debug)]
pub struct Recognizer {
    thresholds: Thresholds,
    wants_long_press: bool,
    wants_pinch: bool,
    session: TouchSession,
}

impl Recognizer {
    pub fn new(thresholds: Thresholds, wants_long_press: bool, wants_pinch: bool) -> Self {
        Self {
            thresholds,
            wants_long_press,
            wants_pinch,
            session: TouchSession::default(),
        }
    }

    /// A finger went down. `points` is the full active touch list; the
    /// session restarts from its first point. Fires for the second finger of
    /// a pinch too, which is when the pinch baseline gets recorded.
    pub fn touch_start(&mut self, points: &[(f64, f64)], now: f64) -> Vec<Effect> {
        let mut fx = Vec::new();
        let Some(&(x, y)) = points.first() else {
            return fx;
        };
        let was_armed = self.session.long_press_armed;
        self.session.begin(x, y, now);
        if points.len() == 2 {
            self.session.pinch_baseline = Some(classify::touch_distance(points[0], points[1]));
        }
        if self.wants_long_press {
            if was_armed {
                fx.push(Effect::CancelLongPress);
            }
            self.session.long_press_armed = true;
            fx.push(Effect::StartLongPress {
                delay_ms: self.thresholds.long_press_delay_ms,
            });
        } else {
            self.session.long_press_armed = false;
        }
        fx
    }

    /// A finger moved. Movement invalidates press-and-hold; with two fingers
    /// down it drives pinch tracking instead.
    pub fn touch_move(&mut self, points: &[(f64, f64)], _now: f64) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.session.long_press_armed {
            self.session.long_press_armed = false;
            fx.push(Effect::CancelLongPress);
        }
        if self.wants_pinch && points.len() == 2 {
            let dist = classify::touch_distance(points[0], points[1]);
            match self.session.pinch_baseline {
                // First two-finger move of this contact: record the baseline,
                // emit nothing yet.
                None => self.session.pinch_baseline = Some(dist),
                Some(baseline) if baseline > 0.0 => {
                    let scale = dist / baseline;
                    if (scale - 1.0).abs() > self.thresholds.pinch_threshold {
                        fx.push(Effect::Emit(Gesture::Pinch(scale)));
                    }
                }
                Some(_) => {}
            }
        }
        fx
    }

    /// A finger lifted. `point` is the lifted touch (`changedTouches[0]`);
    /// `None` for a malformed event, which classifies nothing.
    pub fn touch_end(&mut self, point: Option<(f64, f64)>, now: f64) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.session.long_press_armed {
            self.session.long_press_armed = false;
            fx.push(Effect::CancelLongPress);
        }
        let Some((x, y)) = point else {
            return fx;
        };
        if !self.session.active {
            // Already classified (long press fired, or an earlier finger of
            // this interaction ended). At most one discrete gesture per
            // interaction.
            return fx;
        }
        self.session.active = false;
        let dx = x - self.session.start_x;
        let dy = y - self.session.start_y;
        let elapsed = now - self.session.start_time;
        match classify::classify_release(dx, dy, elapsed, &self.thresholds) {
            Release::Swipe(dir) => {
                fx.push(Effect::Emit(Gesture::Swipe(dir)));
                fx.push(Effect::Haptic(HapticIntensity::Light));
            }
            Release::TapCandidate => self.tap_candidate(now, &mut fx),
            Release::None => {}
        }
        fx
    }

    /// The interaction was aborted by the browser (touchcancel). Nothing is
    /// classified; timers go away.
    pub fn touch_cancel(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.session.long_press_armed {
            self.session.long_press_armed = false;
            fx.push(Effect::CancelLongPress);
        }
        self.session.active = false;
        fx
    }

    fn tap_candidate(&mut self, now: f64, fx: &mut Vec<Effect>) {
        match self.session.last_tap_time {
            Some(last) if now - last < self.thresholds.double_tap_delay_ms as f64 => {
                // Second tap inside the window: the pair is a double tap and
                // the pending deferred single tap must never fire.
                self.session.last_tap_time = None;
                fx.push(Effect::CancelTapTimer);
                fx.push(Effect::Emit(Gesture::DoubleTap));
                fx.push(Effect::Haptic(HapticIntensity::Medium));
            }
            _ => {
                self.session.last_tap_time = Some(now);
                fx.push(Effect::StartTapTimer {
                    delay_ms: self.thresholds.double_tap_delay_ms,
                    tap_time: now,
                });
            }
        }
    }

    /// The long-press timer elapsed without being cancelled.
    pub fn long_press_fired(&mut self) -> Vec<Effect> {
        if !self.session.long_press_armed {
            return Vec::new();
        }
        self.session.long_press_armed = false;
        // Consume the session so the eventual touchend classifies nothing.
        self.session.active = false;
        vec![
            Effect::Emit(Gesture::LongPress),
            Effect::Haptic(HapticIntensity::Medium),
        ]
    }

    /// The deferred single-tap timer elapsed. Emits only if the tap it was
    /// scheduled for is still the latest one; a double tap resets
    /// `last_tap_time` and thereby suppresses the stale timer.
    pub fn tap_timer_fired(&mut self, tap_time: f64) -> Vec<Effect> {
        if self.session.last_tap_time != Some(tap_time) {
            return Vec::new();
        }
        self.session.last_tap_time = None;
        vec![
            Effect::Emit(Gesture::Tap),
            Effect::Haptic(HapticIntensity::Light),
        ]
    }
}
