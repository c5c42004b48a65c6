//! The characteristics schema: the typed vocabulary of visual traits.
//!
//! A [`Characteristics`] value is the partial, declarative record of visual
//! and animation traits attached to one invitation section. Every category is
//! optional; absence means "inherit the template default", never an explicit
//! zero. The schema is the contract both the resolver and every editor
//! control panel agree on: each category enumerates a closed set of legal
//! values, and every default lives here rather than being scattered across
//! consumers.
//!
//! Categorical values arriving from persisted JSON that are not part of the
//! closed set deserialize to the category default instead of failing the
//! whole document. A stale renderer reading a newer editor's output degrades
//! to defaults; it never breaks the public page.

/// Defines a closed categorical trait: a unit enum with stable wire keys,
/// a documented default, and fold-to-default deserialization.
///
/// Every categorical value in the schema goes through this macro so the
/// default-fallback rule is implemented exactly once.
macro_rules! trait_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
        default: $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every legal value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire key used in persisted documents and editor payloads.
            pub fn as_key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Parses a wire key. Returns `None` for unrecognized input so
            /// callers that must reject (the control panels) can; callers
            /// that must degrade (deserialization) fold to the default.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn is_default(&self) -> bool {
                *self == Self::default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_key())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let key = <::std::borrow::Cow<'de, str> as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_key(&key).unwrap_or_default())
            }
        }
    };
}

mod animations;
mod effects;
mod visual;

pub use animations::{AnimationTraits, DelayMs, Duration, Entrance, Hover, MAX_DELAY_MS};
pub use effects::Effects;
pub use visual::{
    Align, BorderRadius, BorderStyle, BorderWidth, ColorTraits, Direction, FontSize, FontWeight,
    GapSize, Layout, LetterSpacing, Shadow, Shape, SpaceSize, Spacing, TextTransform, Typography,
};

use serde::{Deserialize, Serialize};

/// The partial record of visual traits for one renderable section.
///
/// Owned entirely by the section that embeds it: created empty when the
/// section is added, mutated only through the editor control panels, and
/// serialized verbatim into the invitation document. Absent categories are
/// skipped on serialization so a sparse value round-trips sparse.
///
/// # Example
///
/// ```rust
/// use kankotri::characteristics::{AnimationTraits, Characteristics, Entrance};
///
/// let ch = Characteristics {
///     animations: Some(AnimationTraits {
///         entrance: Entrance::SlideUp,
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// let json = serde_json::to_string(&ch).unwrap();
/// assert_eq!(json, r#"{"animations":{"entrance":"slide-up"}}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Characteristics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<AnimationTraits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Effects>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorTraits>,
}

impl Characteristics {
    /// True when no category has been set at all.
    pub fn is_empty(&self) -> bool {
        self.animations.is_none()
            && self.effects.is_none()
            && self.spacing.is_none()
            && self.typography.is_none()
            && self.shape.is_none()
            && self.layout.is_none()
            && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_to_empty_object() {
        let ch = Characteristics::default();
        assert!(ch.is_empty());
        assert_eq!(serde_json::to_string(&ch).unwrap(), "{}");
    }

    #[test]
    fn test_sparse_round_trip() {
        let json = r#"{"animations":{"entrance":"zoom","delay":250},"effects":{"glow":true}}"#;
        let ch: Characteristics = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&ch).unwrap(), json);
    }

    #[test]
    fn test_unknown_categorical_value_folds_to_default() {
        let json = r#"{"animations":{"entrance":"wobble"}}"#;
        let ch: Characteristics = serde_json::from_str(json).unwrap();
        assert_eq!(ch.animations.unwrap().entrance, Entrance::None);
    }

    #[test]
    fn test_unknown_category_is_rejected_by_strict_consumers() {
        // Unknown *values* degrade, but the set of categories itself is
        // closed: serde ignores unknown fields, so the round-trip makes the
        // drift visible (the stray category does not survive).
        let json = r#"{"sparkles":{"on":true}}"#;
        let ch: Characteristics = serde_json::from_str(json).unwrap();
        assert!(ch.is_empty());
        assert_eq!(serde_json::to_string(&ch).unwrap(), "{}");
    }

    #[test]
    fn test_every_key_parses_back() {
        for e in Entrance::ALL {
            assert_eq!(Entrance::from_key(e.as_key()), Some(*e));
        }
        for h in Hover::ALL {
            assert_eq!(Hover::from_key(h.as_key()), Some(*h));
        }
        for s in SpaceSize::ALL {
            assert_eq!(SpaceSize::from_key(s.as_key()), Some(*s));
        }
    }
}
