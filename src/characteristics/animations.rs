//! Animation traits: entrance, duration, delay and hover.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound for entrance delays, in milliseconds.
pub const MAX_DELAY_MS: u32 = 2000;

trait_enum! {
    /// Mount-time entrance variant.
    Entrance {
        None => "none",
        Fade => "fade",
        SlideUp => "slide-up",
        SlideDown => "slide-down",
        SlideLeft => "slide-left",
        SlideRight => "slide-right",
        Zoom => "zoom",
        Bounce => "bounce",
    }
    default: None
}

trait_enum! {
    /// How long the entrance transition runs.
    Duration {
        Fast => "fast",
        Normal => "normal",
        Slow => "slow",
    }
    default: Normal
}

trait_enum! {
    /// Style delta applied while the pointer is over the element.
    Hover {
        None => "none",
        Lift => "lift",
        Scale => "scale",
        Glow => "glow",
        Rotate => "rotate",
    }
    default: None
}

/// Entrance delay in milliseconds, clamped to `[0, MAX_DELAY_MS]`.
///
/// The animation control panel clamps before emitting a change event, but
/// persisted documents are untrusted, so the clamp is also applied on
/// deserialization and on every constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DelayMs(u32);

impl DelayMs {
    /// Clamps an arbitrary requested delay into the legal range.
    pub fn clamped(ms: i64) -> Self {
        Self(ms.clamp(0, MAX_DELAY_MS as i64) as u32)
    }

    pub fn millis(self) -> u32 {
        self.0
    }

    /// The delay in seconds, the unit the animation runtime consumes.
    pub fn as_secs(self) -> f32 {
        self.0 as f32 / 1000.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Serialize for DelayMs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for DelayMs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Ok(DelayMs::clamped(ms))
    }
}

/// The animation slice of a characteristics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTraits {
    #[serde(skip_serializing_if = "Entrance::is_default")]
    pub entrance: Entrance,
    #[serde(skip_serializing_if = "Duration::is_default")]
    pub duration: Duration,
    #[serde(skip_serializing_if = "DelayMs::is_zero")]
    pub delay: DelayMs,
    #[serde(skip_serializing_if = "Hover::is_default")]
    pub hover: Hover,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_clamps_both_ends() {
        assert_eq!(DelayMs::clamped(-50).millis(), 0);
        assert_eq!(DelayMs::clamped(0).millis(), 0);
        assert_eq!(DelayMs::clamped(1500).millis(), 1500);
        assert_eq!(DelayMs::clamped(9999).millis(), MAX_DELAY_MS);
    }

    #[test]
    fn test_delay_deserialization_clamps() {
        let traits: AnimationTraits = serde_json::from_str(r#"{"delay":5000}"#).unwrap();
        assert_eq!(traits.delay.millis(), MAX_DELAY_MS);

        let traits: AnimationTraits = serde_json::from_str(r#"{"delay":-10}"#).unwrap();
        assert_eq!(traits.delay.millis(), 0);
    }

    #[test]
    fn test_delay_to_seconds() {
        assert_eq!(DelayMs::clamped(100).as_secs(), 0.1);
        assert_eq!(DelayMs::clamped(0).as_secs(), 0.0);
    }

    #[test]
    fn test_entrance_wire_keys() {
        assert_eq!(Entrance::SlideUp.as_key(), "slide-up");
        assert_eq!(Entrance::from_key("slide-left"), Some(Entrance::SlideLeft));
        assert_eq!(Entrance::from_key("swoosh"), None);
    }

    #[test]
    fn test_defaults() {
        let traits = AnimationTraits::default();
        assert_eq!(traits.entrance, Entrance::None);
        assert_eq!(traits.duration, Duration::Normal);
        assert_eq!(traits.delay.millis(), 0);
        assert_eq!(traits.hover, Hover::None);
    }
}
