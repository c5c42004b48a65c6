//! Explicit device-capability values for render contexts.
//!
//! Capabilities are computed once at the edge of a render (from client
//! hints, or from the process-wide detector when none are available) and
//! threaded through as a plain parameter. Nothing inside resolution reads
//! ambient state.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Coarse viewport class, derived from width breakpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// What the viewing device can comfortably do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceCapabilities {
    pub viewport: Viewport,
    /// Constrained memory or CPU; decorative overlays are skipped.
    pub low_end: bool,
    /// The user asked for reduced motion; entrances and hovers go still.
    pub reduced_motion: bool,
    /// The user asked to save data.
    pub save_data: bool,
}

impl DeviceCapabilities {
    /// Derives capabilities from client hints.
    ///
    /// Widths under 768 px classify as mobile, under 1024 px as tablet.
    /// Devices reporting less than 4 GiB of memory count as low-end.
    pub fn from_client_hints(
        viewport_width: u32,
        device_memory_gb: Option<f64>,
        reduced_motion: bool,
        save_data: bool,
    ) -> Self {
        let viewport = if viewport_width < 768 {
            Viewport::Mobile
        } else if viewport_width < 1024 {
            Viewport::Tablet
        } else {
            Viewport::Desktop
        };
        Self {
            viewport,
            low_end: device_memory_gb.is_some_and(|gb| gb < 4.0),
            reduced_motion,
            save_data,
        }
    }
}

type DeviceDetector = fn() -> DeviceCapabilities;

static DEVICE_DETECTOR: Lazy<Mutex<DeviceDetector>> = Lazy::new(|| Mutex::new(default_detector));

/// Overrides the detector used when a render context has no client hints.
///
/// Useful for tests or for forcing a capability profile.
pub fn set_device_detector(detector: DeviceDetector) {
    let mut guard = DEVICE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Computes a capability value from the process-wide detector.
///
/// Call once per render context and pass the value down; resolution never
/// calls this itself.
pub fn detect_device() -> DeviceCapabilities {
    let detector = DEVICE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn default_detector() -> DeviceCapabilities {
    // Server-side rendering has no client to probe; assume full capability
    // and let client hints narrow it.
    DeviceCapabilities::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let mobile = DeviceCapabilities::from_client_hints(400, None, false, false);
        assert_eq!(mobile.viewport, Viewport::Mobile);

        let tablet = DeviceCapabilities::from_client_hints(800, None, false, false);
        assert_eq!(tablet.viewport, Viewport::Tablet);

        let desktop = DeviceCapabilities::from_client_hints(1440, None, false, false);
        assert_eq!(desktop.viewport, Viewport::Desktop);
    }

    #[test]
    fn test_low_end_from_memory_hint() {
        let caps = DeviceCapabilities::from_client_hints(1440, Some(2.0), false, false);
        assert!(caps.low_end);

        let caps = DeviceCapabilities::from_client_hints(1440, Some(8.0), false, false);
        assert!(!caps.low_end);

        // No hint means no low-end downgrade.
        let caps = DeviceCapabilities::from_client_hints(1440, None, false, false);
        assert!(!caps.low_end);
    }

    #[test]
    fn test_detector_override() {
        set_device_detector(|| DeviceCapabilities {
            reduced_motion: true,
            ..Default::default()
        });
        assert!(detect_device().reduced_motion);

        set_device_detector(DeviceCapabilities::default);
        assert!(!detect_device().reduced_motion);
    }
}
