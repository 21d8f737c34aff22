//! Haptic output port.
//!
//! Gesture classification never talks to the vibration motor directly; it
//! goes through the `Haptics` trait so tests run without a device and other
//! backends (gamepad rumble, none at all) can be swapped in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

impl HapticIntensity {
    /// Vibration pulse length used by [`WebHaptics`].
    pub fn pulse_ms(self) -> u32 {
        match self {
            HapticIntensity::Light => 10,
            HapticIntensity::Medium => 20,
            HapticIntensity::Heavy => 40,
        }
    }
}

/// Fire-and-forget tactile feedback. Implementations must never panic and
/// must be a no-op when the capability is unavailable.
pub trait Haptics {
    fn trigger(&self, intensity: HapticIntensity);
}

/// Backend that does nothing; useful in tests and on haptic-free hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn trigger(&self, _intensity: HapticIntensity) {}
}

/// `navigator.vibrate` backend. Browsers without vibration support return
/// false from `vibrate`; either way there is nothing to handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHaptics;

impl Haptics for WebHaptics {
    fn trigger(&self, intensity: HapticIntensity) {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().vibrate_with_duration(intensity.pulse_ms());
        }
    }
}

/// Fire haptic feedback outside the gesture pipeline (e.g. on a button
/// press) using the default web backend.
pub fn trigger_haptic(intensity: HapticIntensity) {
    WebHaptics.trigger(intensity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_lengths_are_ordered() {
        assert!(HapticIntensity::Light.pulse_ms() < HapticIntensity::Medium.pulse_ms());
        assert!(HapticIntensity::Medium.pulse_ms() < HapticIntensity::Heavy.pulse_ms());
    }

    #[test]
    fn intensity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HapticIntensity::Medium).unwrap(),
            r#""medium""#
        );
        let i: HapticIntensity = serde_json::from_str(r#""heavy""#).unwrap();
        assert_eq!(i, HapticIntensity::Heavy);
    }

    #[test]
    fn noop_backend_accepts_everything() {
        let port: &dyn Haptics = &NoopHaptics;
        port.trigger(HapticIntensity::Light);
        port.trigger(HapticIntensity::Heavy);
    }
}
