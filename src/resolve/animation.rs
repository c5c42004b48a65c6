//! Animation parameter resolution: entrance variants, timing and hover.

use serde::Serialize;

use crate::characteristics::{AnimationTraits, Characteristics, Duration, Entrance, Hover};

/// Spring bounce factor used by the bounce entrance variant.
pub const BOUNCE_FACTOR: f32 = 0.5;

/// A visual state the motion runtime interpolates between.
///
/// Identity fields are skipped on serialization so the declarative payload
/// handed to the client runtime stays minimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionState {
    #[serde(skip_serializing_if = "at_one")]
    pub opacity: f32,
    #[serde(skip_serializing_if = "at_zero")]
    pub x: f32,
    #[serde(skip_serializing_if = "at_zero")]
    pub y: f32,
    #[serde(skip_serializing_if = "at_one")]
    pub scale: f32,
    #[serde(skip_serializing_if = "at_zero")]
    pub rotate: f32,
}

impl MotionState {
    /// Fully settled: opacity 1, zero offsets, scale 1.
    pub const IDENTITY: MotionState = MotionState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn at_one(v: &f32) -> bool {
    *v == 1.0
}

fn at_zero(v: &f32) -> bool {
    *v == 0.0
}

/// Timing curve for the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Easing {
    /// Uniform eased timing, used by every variant except bounce.
    Tween { ease: &'static str },
    /// Spring physics, requested only by the bounce variant.
    Spring { bounce: f32 },
}

impl Easing {
    pub fn tween() -> Self {
        Easing::Tween { ease: "easeOut" }
    }

    pub fn spring() -> Self {
        Easing::Spring {
            bounce: BOUNCE_FACTOR,
        }
    }
}

/// Duration, delay and easing of the entrance transition, in the units the
/// motion runtime consumes (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

/// Fixed style delta applied while the pointer is over the element. Reverts
/// in full on pointer-leave; that contract belongs to the client runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoverDelta {
    #[serde(skip_serializing_if = "at_zero")]
    pub y: f32,
    #[serde(skip_serializing_if = "at_one")]
    pub scale: f32,
    #[serde(skip_serializing_if = "at_zero")]
    pub rotate: f32,
    #[serde(rename = "boxShadow", skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<&'static str>,
}

/// The resolved animation half of a characteristics value: a declarative
/// `{initial, animate, transition}` description for the motion runtime,
/// plus the hover response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationSpec {
    pub entrance: Entrance,
    pub initial: MotionState,
    pub animate: MotionState,
    pub transition: Transition,
    pub hover: Hover,
}

impl AnimationSpec {
    /// The identity spec: no mount transition, no hover response.
    pub fn still() -> Self {
        animation_of_traits(AnimationTraits::default())
    }

    /// True when mounting needs no transition at all. Callers on this path
    /// must skip the motion runtime entirely.
    pub fn is_still(&self) -> bool {
        self.entrance == Entrance::None
    }

    /// Stable identity of the mount transition, derived only from entrance,
    /// duration and effective delay. Re-renders caused by unrelated edits
    /// keep the same key and therefore never re-trigger the transition.
    pub fn motion_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.entrance.as_key(),
            self.transition.duration,
            self.transition.delay
        )
    }

    /// The fixed delta for this spec's hover response, or `None` when
    /// hovering changes nothing.
    pub fn hover_delta(&self) -> Option<HoverDelta> {
        let delta = match self.hover {
            Hover::None => return None,
            Hover::Lift => HoverDelta {
                y: -10.0,
                ..NEUTRAL_DELTA
            },
            Hover::Scale => HoverDelta {
                scale: 1.05,
                ..NEUTRAL_DELTA
            },
            Hover::Glow => HoverDelta {
                box_shadow: Some("0 0 30px rgba(255, 215, 0, 0.8)"),
                ..NEUTRAL_DELTA
            },
            Hover::Rotate => HoverDelta {
                rotate: 5.0,
                ..NEUTRAL_DELTA
            },
        };
        Some(delta)
    }
}

const NEUTRAL_DELTA: HoverDelta = HoverDelta {
    y: 0.0,
    scale: 1.0,
    rotate: 0.0,
    box_shadow: None,
};

impl Entrance {
    /// The starting visual state of this variant. The ending state is always
    /// [`MotionState::IDENTITY`].
    pub fn initial_state(self) -> MotionState {
        match self {
            Entrance::None => MotionState::IDENTITY,
            Entrance::Fade => MotionState {
                opacity: 0.0,
                ..MotionState::IDENTITY
            },
            Entrance::SlideUp => MotionState {
                opacity: 0.0,
                y: 50.0,
                ..MotionState::IDENTITY
            },
            Entrance::SlideDown => MotionState {
                opacity: 0.0,
                y: -50.0,
                ..MotionState::IDENTITY
            },
            Entrance::SlideLeft => MotionState {
                opacity: 0.0,
                x: 50.0,
                ..MotionState::IDENTITY
            },
            Entrance::SlideRight => MotionState {
                opacity: 0.0,
                x: -50.0,
                ..MotionState::IDENTITY
            },
            Entrance::Zoom => MotionState {
                opacity: 0.0,
                scale: 0.5,
                ..MotionState::IDENTITY
            },
            Entrance::Bounce => MotionState {
                opacity: 0.0,
                scale: 0.3,
                ..MotionState::IDENTITY
            },
        }
    }

    fn easing(self) -> Easing {
        match self {
            Entrance::Bounce => Easing::spring(),
            _ => Easing::tween(),
        }
    }
}

impl Duration {
    pub fn secs(self) -> f32 {
        match self {
            Duration::Fast => 0.3,
            Duration::Normal => 0.6,
            Duration::Slow => 1.0,
        }
    }
}

/// Builds the animation half of a resolved characteristics value.
pub(super) fn animation_of(ch: &Characteristics) -> AnimationSpec {
    animation_of_traits(ch.animations.unwrap_or_default())
}

fn animation_of_traits(traits: AnimationTraits) -> AnimationSpec {
    AnimationSpec {
        entrance: traits.entrance,
        initial: traits.entrance.initial_state(),
        animate: MotionState::IDENTITY,
        transition: Transition {
            duration: traits.duration.secs(),
            // Clamped again here: the schema clamps on construction, but
            // this function must hold the clamp law on its own.
            delay: crate::characteristics::DelayMs::clamped(traits.delay.millis() as i64).as_secs(),
            easing: traits.entrance.easing(),
        },
        hover: traits.hover,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::DelayMs;

    fn spec_for(traits: AnimationTraits) -> AnimationSpec {
        animation_of(&Characteristics {
            animations: Some(traits),
            ..Default::default()
        })
    }

    #[test]
    fn test_slide_up_fast_with_delay() {
        let spec = spec_for(AnimationTraits {
            entrance: Entrance::SlideUp,
            duration: Duration::Fast,
            delay: DelayMs::clamped(100),
            ..Default::default()
        });
        assert_eq!(spec.initial.opacity, 0.0);
        assert_eq!(spec.initial.y, 50.0);
        assert_eq!(spec.animate, MotionState::IDENTITY);
        assert_eq!(spec.transition.duration, 0.3);
        assert_eq!(spec.transition.delay, 0.1);
        assert_eq!(spec.transition.easing, Easing::tween());
    }

    #[test]
    fn test_bounce_requests_spring_easing() {
        let spec = spec_for(AnimationTraits {
            entrance: Entrance::Bounce,
            ..Default::default()
        });
        assert_eq!(spec.transition.easing, Easing::Spring { bounce: 0.5 });
        // Duration unspecified means normal.
        assert_eq!(spec.transition.duration, 0.6);
        assert_eq!(spec.initial.scale, 0.3);
    }

    #[test]
    fn test_absent_animations_are_still() {
        let spec = animation_of(&Characteristics::default());
        assert!(spec.is_still());
        assert!(spec.initial.is_identity());
        assert_eq!(spec.hover_delta(), None);
    }

    #[test]
    fn test_every_entrance_ends_at_identity() {
        for entrance in Entrance::ALL {
            let spec = spec_for(AnimationTraits {
                entrance: *entrance,
                ..Default::default()
            });
            assert_eq!(spec.animate, MotionState::IDENTITY);
        }
    }

    #[test]
    fn test_motion_key_ignores_unrelated_traits() {
        let base = AnimationTraits {
            entrance: Entrance::Fade,
            duration: Duration::Slow,
            delay: DelayMs::clamped(200),
            hover: Hover::None,
        };
        let with_hover = AnimationTraits {
            hover: Hover::Scale,
            ..base
        };
        assert_eq!(spec_for(base).motion_key(), spec_for(with_hover).motion_key());

        let different_delay = AnimationTraits {
            delay: DelayMs::clamped(300),
            ..base
        };
        assert_ne!(
            spec_for(base).motion_key(),
            spec_for(different_delay).motion_key()
        );
    }

    #[test]
    fn test_hover_deltas_are_fixed() {
        let scale = spec_for(AnimationTraits {
            hover: Hover::Scale,
            ..Default::default()
        });
        assert_eq!(scale.hover_delta().unwrap().scale, 1.05);

        let lift = spec_for(AnimationTraits {
            hover: Hover::Lift,
            ..Default::default()
        });
        assert_eq!(lift.hover_delta().unwrap().y, -10.0);
    }

    #[test]
    fn test_motion_state_serializes_minimal_payload() {
        let initial = Entrance::SlideUp.initial_state();
        assert_eq!(
            serde_json::to_string(&initial).unwrap(),
            r#"{"opacity":0.0,"y":50.0}"#
        );
        assert_eq!(serde_json::to_string(&MotionState::IDENTITY).unwrap(), "{}");
    }
}
