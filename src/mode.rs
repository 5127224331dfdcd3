//! Color mode and OS-level mode detection.
//!
//! Token resolution and variant composition always take a [`ColorMode`] as an
//! explicit argument; nothing in the resolution path reads ambient state. The
//! detector in this module is a convenience for hosts that want to follow the
//! OS setting, with an override hook for tests or forced modes.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The active color mode a style is resolved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns true in dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Picks one of two values by mode, light first.
    ///
    /// Mirrors the common "mode(light, dark)" helper in design systems.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undertone::ColorMode;
    ///
    /// assert_eq!(ColorMode::Dark.pick("black", "white"), "white");
    /// assert_eq!(ColorMode::Light.pick("black", "white"), "black");
    /// ```
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            ColorMode::Light => light,
            ColorMode::Dark => dark,
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`detect_color_mode`].
///
/// Useful for testing or for forcing a specific color mode application-wide.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the current color mode as reported by the configured detector.
///
/// Defaults to OS detection via `dark-light`.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_pick_by_mode() {
        assert_eq!(ColorMode::Light.pick(1, 2), 1);
        assert_eq!(ColorMode::Dark.pick(1, 2), 2);
        assert!(!ColorMode::Light.is_dark());
        assert!(ColorMode::Dark.is_dark());
    }

    #[test]
    fn test_mode_serde_round_trip() {
        let json = serde_json::to_string(&ColorMode::Dark).unwrap();
        assert_eq!(json, r#""dark""#);
        let back: ColorMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorMode::Dark);
    }

    #[test]
    #[serial]
    fn test_detector_override() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
