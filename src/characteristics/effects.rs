//! Independent visual effect flags.

use serde::{Deserialize, Serialize};

/// Set of independent boolean effect flags.
///
/// Each flag contributes its own fixed style fragment when set; flags are
/// additive and order-independent, so any combination is legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effects {
    #[serde(skip_serializing_if = "is_false")]
    pub glow: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub glassmorphism: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub neumorphism: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub particles: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub confetti: bool,
}

impl Effects {
    pub fn any(&self) -> bool {
        self.glow || self.glassmorphism || self.neumorphism || self.particles || self.confetti
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        assert!(!Effects::default().any());
    }

    #[test]
    fn test_only_set_flags_serialize() {
        let effects = Effects {
            glow: true,
            confetti: true,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&effects).unwrap(),
            r#"{"glow":true,"confetti":true}"#
        );
    }

    #[test]
    fn test_missing_flags_deserialize_off() {
        let effects: Effects = serde_json::from_str(r#"{"particles":true}"#).unwrap();
        assert!(effects.particles);
        assert!(!effects.glow);
        assert!(effects.any());
    }
}
