//! The style resolver: a pure mapping from characteristics to presentation.
//!
//! [`resolve`] turns a (possibly empty) [`Characteristics`] value into a
//! concrete [`StyleDeclaration`] plus an [`AnimationSpec`] through fixed
//! lookup tables. It sits on the editor's live-preview render path, so it
//! never fails: unrecognized or absent traits resolve to their category's
//! documented default, and the same input always yields the same output.
//!
//! [`resolve_for_device`] is the device-aware variant. Capabilities are an
//! explicit parameter computed once per render context, never an ambient
//! global read, so resolution stays pure and testable.

mod animation;
mod style;

pub use animation::{
    AnimationSpec, Easing, HoverDelta, MotionState, Transition, BOUNCE_FACTOR,
};
pub use style::{StyleDeclaration, CONFETTI_MARKER, GLOW_FRAGMENT, PARTICLES_MARKER};

use crate::characteristics::Characteristics;
use crate::device::DeviceCapabilities;

/// The resolver's output: concrete style plus animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub style: StyleDeclaration,
    pub animation: AnimationSpec,
}

/// Resolves a characteristics value to concrete presentation parameters.
///
/// Pure and total: structurally equal input yields structurally equal
/// output, and no input panics.
///
/// # Example
///
/// ```rust
/// use kankotri::characteristics::Characteristics;
/// use kankotri::resolve::resolve;
///
/// let resolved = resolve(&Characteristics::default());
/// assert_eq!(resolved.style.get("padding"), Some("1rem"));
/// assert!(resolved.animation.is_still());
/// ```
pub fn resolve(characteristics: &Characteristics) -> Resolved {
    Resolved {
        style: style::style_of(characteristics),
        animation: animation::animation_of(characteristics),
    }
}

/// Resolves with an explicit device-capability value applied.
///
/// Reduced motion collapses the entrance and hover to their identity
/// responses; low-end or data-saver devices drop the decorative overlay
/// markers. The declared characteristics are untouched.
pub fn resolve_for_device(
    characteristics: &Characteristics,
    capabilities: &DeviceCapabilities,
) -> Resolved {
    let mut resolved = resolve(characteristics);
    if capabilities.reduced_motion {
        resolved.animation = AnimationSpec::still();
    }
    if capabilities.low_end || capabilities.save_data {
        resolved.style.remove(PARTICLES_MARKER);
        resolved.style.remove(CONFETTI_MARKER);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::{AnimationTraits, Effects, Entrance, Hover};

    #[test]
    fn test_empty_input_yields_baseline() {
        let resolved = resolve(&Characteristics::default());
        assert_eq!(resolved.style.get("padding"), Some("1rem"));
        assert_eq!(resolved.style.get("margin"), Some("1rem"));
        assert_eq!(resolved.style.get("gap"), Some("1rem"));
        assert!(resolved.animation.is_still());
        assert!(resolved.animation.initial.is_identity());
    }

    #[test]
    fn test_resolving_twice_is_identical() {
        let ch = Characteristics {
            animations: Some(AnimationTraits {
                entrance: Entrance::Zoom,
                hover: Hover::Lift,
                ..Default::default()
            }),
            effects: Some(Effects {
                glassmorphism: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(resolve(&ch), resolve(&ch));
    }

    #[test]
    fn test_effect_additivity() {
        let both = resolve(&Characteristics {
            effects: Some(Effects {
                glow: true,
                glassmorphism: true,
                ..Default::default()
            }),
            ..Default::default()
        });
        let glow_only = resolve(&Characteristics {
            effects: Some(Effects {
                glow: true,
                ..Default::default()
            }),
            ..Default::default()
        });
        let glass_only = resolve(&Characteristics {
            effects: Some(Effects {
                glassmorphism: true,
                ..Default::default()
            }),
            ..Default::default()
        });

        // Each fragment is present and unaltered by the other's presence.
        assert_eq!(both.style.get("box-shadow"), glow_only.style.get("box-shadow"));
        assert_eq!(both.style.get("backdrop-filter"), glass_only.style.get("backdrop-filter"));
        assert_eq!(both.style.get("background"), glass_only.style.get("background"));
    }

    #[test]
    fn test_glow_effect_with_scale_hover() {
        let resolved = resolve(&Characteristics {
            effects: Some(Effects {
                glow: true,
                ..Default::default()
            }),
            animations: Some(AnimationTraits {
                hover: Hover::Scale,
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(resolved.style.get("box-shadow"), Some(GLOW_FRAGMENT));
        assert_eq!(resolved.animation.hover_delta().unwrap().scale, 1.05);
    }

    #[test]
    fn test_reduced_motion_stills_animation() {
        let ch = Characteristics {
            animations: Some(AnimationTraits {
                entrance: Entrance::Bounce,
                hover: Hover::Rotate,
                ..Default::default()
            }),
            ..Default::default()
        };
        let caps = DeviceCapabilities {
            reduced_motion: true,
            ..Default::default()
        };
        let resolved = resolve_for_device(&ch, &caps);
        assert!(resolved.animation.is_still());
        assert_eq!(resolved.animation.hover_delta(), None);
        // Static style is unaffected.
        assert_eq!(resolved.style, resolve(&ch).style);
    }

    #[test]
    fn test_low_end_devices_drop_overlay_markers() {
        let ch = Characteristics {
            effects: Some(Effects {
                particles: true,
                confetti: true,
                glow: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let caps = DeviceCapabilities {
            low_end: true,
            ..Default::default()
        };
        let resolved = resolve_for_device(&ch, &caps);
        assert_eq!(resolved.style.get(PARTICLES_MARKER), None);
        assert_eq!(resolved.style.get(CONFETTI_MARKER), None);
        // Cheap effects survive.
        assert_eq!(resolved.style.get("box-shadow"), Some(GLOW_FRAGMENT));
    }
}
