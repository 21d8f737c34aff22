//! DOM wiring: attach touch listeners to an element, run the recognizer on
//! every event, and dispatch its effects to callbacks, timers, and the
//! haptic port.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, TouchEvent, TouchList};

use crate::classify::{Gesture, SwipeDirection};
use crate::config::GestureConfig;
use crate::haptics::{HapticIntensity, Haptics, WebHaptics};
use crate::recognizer::{Effect, Recognizer};
use crate::timer::CancelableTimer;

#[derive(Default)]
struct Timers {
    long_press: Option<CancelableTimer>,
    deferred_tap: Option<CancelableTimer>,
}

// One per attachment, shared by the event listeners and timer callbacks.
struct Shared {
    recognizer: RefCell<Recognizer>,
    timers: RefCell<Timers>,
    config: GestureConfig,
    haptics: Rc<dyn Haptics>,
    detached: Cell<bool>,
}

struct Listeners {
    start: Closure<dyn FnMut(TouchEvent)>,
    mv: Closure<dyn FnMut(TouchEvent)>,
    end: Closure<dyn FnMut(TouchEvent)>,
    cancel: Closure<dyn FnMut(TouchEvent)>,
}

struct Attachment {
    target: EventTarget,
    shared: Rc<Shared>,
    listeners: RefCell<Option<Listeners>>,
}

thread_local! {
    // Live attachments, used to replace a previous attachment to the same
    // element instead of silently double-registering handlers.
    static LIVE: RefCell<Vec<Rc<Attachment>>> = RefCell::new(Vec::new());
}

/// Detachable handle to one gesture attachment. Dropping the handle
/// detaches, so keep it alive as long as gestures should be recognized.
pub struct GestureHandle {
    inner: Rc<Attachment>,
}

impl GestureHandle {
    /// Remove the DOM listeners and synchronously cancel any pending
    /// long-press or deferred-tap timer, so no gesture callback can fire
    /// after this returns. Calling detach twice is a no-op.
    pub fn detach(&self) {
        detach_attachment(&self.inner);
    }

    /// Fire haptic feedback through this attachment's port, outside the
    /// gesture pipeline.
    pub fn trigger_haptic(&self, intensity: HapticIntensity) {
        self.inner.shared.haptics.trigger(intensity);
    }
}

impl Drop for GestureHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Attach touch gesture recognition to `target`.
///
/// If `target` already has a live attachment, that attachment is detached
/// first and then replaced by the new one (its handle becomes inert).
pub fn attach_listeners(target: &EventTarget, mut config: GestureConfig) -> GestureHandle {
    let previous = LIVE.with(|live| {
        let mut live = live.borrow_mut();
        live.iter()
            .position(|a| js_sys::Object::is(a.target.as_ref(), target.as_ref()))
            .map(|i| live.remove(i))
    });
    if let Some(previous) = previous {
        log::warn!("element already has gesture listeners; replacing the previous attachment");
        detach_attachment(&previous);
    }

    let haptics = config
        .haptics
        .take()
        .unwrap_or_else(|| Rc::new(WebHaptics) as Rc<dyn Haptics>);
    let recognizer = Recognizer::new(
        config.thresholds,
        config.wants_long_press(),
        config.wants_pinch(),
    );
    let shared = Rc::new(Shared {
        recognizer: RefCell::new(recognizer),
        timers: RefCell::new(Timers::default()),
        config,
        haptics,
        detached: Cell::new(false),
    });

    let start = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if shared.detached.get() {
                return;
            }
            let points = touch_points(&e.touches());
            let fx = shared
                .recognizer
                .borrow_mut()
                .touch_start(&points, js_sys::Date::now());
            dispatch(&shared, fx);
        }) as Box<dyn FnMut(_)>)
    };
    let mv = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if shared.detached.get() {
                return;
            }
            let points = touch_points(&e.touches());
            let fx = shared
                .recognizer
                .borrow_mut()
                .touch_move(&points, js_sys::Date::now());
            dispatch(&shared, fx);
        }) as Box<dyn FnMut(_)>)
    };
    let end = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if shared.detached.get() {
                return;
            }
            let point = e
                .changed_touches()
                .item(0)
                .map(|t| (t.client_x() as f64, t.client_y() as f64));
            let fx = shared
                .recognizer
                .borrow_mut()
                .touch_end(point, js_sys::Date::now());
            dispatch(&shared, fx);
        }) as Box<dyn FnMut(_)>)
    };
    let cancel = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |_e: TouchEvent| {
            if shared.detached.get() {
                return;
            }
            let fx = shared.recognizer.borrow_mut().touch_cancel();
            dispatch(&shared, fx);
        }) as Box<dyn FnMut(_)>)
    };

    target
        .add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())
        .ok();
    target
        .add_event_listener_with_callback("touchmove", mv.as_ref().unchecked_ref())
        .ok();
    target
        .add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref())
        .ok();
    target
        .add_event_listener_with_callback("touchcancel", cancel.as_ref().unchecked_ref())
        .ok();

    let inner = Rc::new(Attachment {
        target: target.clone(),
        shared,
        listeners: RefCell::new(Some(Listeners {
            start,
            mv,
            end,
            cancel,
        })),
    });
    LIVE.with(|live| live.borrow_mut().push(inner.clone()));
    GestureHandle { inner }
}

fn detach_attachment(attachment: &Rc<Attachment>) {
    if attachment.shared.detached.replace(true) {
        return;
    }
    // Timers first: no gesture callback may fire after detach returns.
    {
        let mut timers = attachment.shared.timers.borrow_mut();
        timers.long_press = None;
        timers.deferred_tap = None;
    }
    if let Some(listeners) = attachment.listeners.borrow_mut().take() {
        let target = &attachment.target;
        let _ = target
            .remove_event_listener_with_callback("touchstart", listeners.start.as_ref().unchecked_ref());
        let _ = target
            .remove_event_listener_with_callback("touchmove", listeners.mv.as_ref().unchecked_ref());
        let _ = target
            .remove_event_listener_with_callback("touchend", listeners.end.as_ref().unchecked_ref());
        let _ = target
            .remove_event_listener_with_callback("touchcancel", listeners.cancel.as_ref().unchecked_ref());
    }
    LIVE.with(|live| live.borrow_mut().retain(|a| !Rc::ptr_eq(a, attachment)));
}

fn dispatch(shared: &Rc<Shared>, effects: Vec<Effect>) {
    for effect in effects {
        if shared.detached.get() {
            return;
        }
        match effect {
            Effect::Emit(gesture) => {
                log::debug!("gesture: {gesture:?}");
                emit(shared, gesture);
            }
            Effect::Haptic(intensity) => shared.haptics.trigger(intensity),
            Effect::StartLongPress { delay_ms } => {
                let weak = Rc::downgrade(shared);
                let timer = CancelableTimer::schedule(delay_ms, move || {
                    if let Some(shared) = weak.upgrade() {
                        if shared.detached.get() {
                            return;
                        }
                        shared.timers.borrow_mut().long_press = None;
                        let fx = shared.recognizer.borrow_mut().long_press_fired();
                        dispatch(&shared, fx);
                    }
                });
                shared.timers.borrow_mut().long_press = timer;
            }
            Effect::CancelLongPress => {
                shared.timers.borrow_mut().long_press = None;
            }
            Effect::StartTapTimer { delay_ms, tap_time } => {
                let weak = Rc::downgrade(shared);
                let timer = CancelableTimer::schedule(delay_ms, move || {
                    if let Some(shared) = weak.upgrade() {
                        if shared.detached.get() {
                            return;
                        }
                        shared.timers.borrow_mut().deferred_tap = None;
                        let fx = shared.recognizer.borrow_mut().tap_timer_fired(tap_time);
                        dispatch(&shared, fx);
                    }
                });
                shared.timers.borrow_mut().deferred_tap = timer;
            }
            Effect::CancelTapTimer => {
                shared.timers.borrow_mut().deferred_tap = None;
            }
        }
    }
}

// No RefCell borrow is held here, so a callback may reentrantly detach.
fn emit(shared: &Shared, gesture: Gesture) {
    let cfg = &shared.config;
    match gesture {
        Gesture::Swipe(SwipeDirection::Left) => call(&cfg.on_swipe_left),
        Gesture::Swipe(SwipeDirection::Right) => call(&cfg.on_swipe_right),
        Gesture::Swipe(SwipeDirection::Up) => call(&cfg.on_swipe_up),
        Gesture::Swipe(SwipeDirection::Down) => call(&cfg.on_swipe_down),
        Gesture::Tap => call(&cfg.on_tap),
        Gesture::DoubleTap => call(&cfg.on_double_tap),
        Gesture::LongPress => call(&cfg.on_long_press),
        Gesture::Pinch(scale) => {
            if let Some(cb) = &cfg.on_pinch {
                cb(scale);
            }
        }
    }
}

fn call(cb: &Option<Box<dyn Fn()>>) {
    if let Some(cb) = cb {
        cb();
    }
}

fn touch_points(list: &TouchList) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(t) = list.item(i) {
            points.push((t.client_x() as f64, t.client_y() as f64));
        }
    }
    points
}
