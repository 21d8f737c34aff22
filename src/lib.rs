//! Multi-touch gesture recognition for browser wasm apps.
//!
//! Attach to any element and get discrete gestures (four-direction swipe,
//! tap, double tap, long press) plus continuous pinch, each with optional
//! haptic feedback:
//!
//! ```no_run
//! use touch_gestures::{attach_listeners, GestureConfig};
//!
//! let element: web_sys::EventTarget = unimplemented!();
//! let handle = attach_listeners(&element, GestureConfig {
//!     on_swipe_left: Some(Box::new(|| log::info!("next page"))),
//!     on_pinch: Some(Box::new(|scale| log::info!("zoom {scale}"))),
//!     ..Default::default()
//! });
//! // later: handle.detach();
//! ```
//!
//! All classification logic lives in [`recognizer::Recognizer`], a DOM-free
//! state machine that can be driven directly with synthetic events.

pub mod classify;
pub mod config;
pub mod engine;
pub mod haptics;
pub mod recognizer;
pub mod state;
pub mod timer;

pub use classify::{Gesture, SwipeDirection};
pub use config::{GestureConfig, Thresholds};
pub use engine::{GestureHandle, attach_listeners};
pub use haptics::{HapticIntensity, Haptics, NoopHaptics, WebHaptics, trigger_haptic};
