//! Style declarations and the fixed trait-to-CSS lookup tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::characteristics::{
    Align, BorderRadius, BorderWidth, Characteristics, Direction, Effects, FontSize, FontWeight,
    GapSize, LetterSpacing, Shadow, SpaceSize, TextTransform,
};

/// A flat, deterministic mapping of CSS property names to values.
///
/// Backed by a `BTreeMap` so iteration order (and therefore the rendered
/// inline style) is stable for structurally equal input, which keeps the
/// editor's live preview deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    #[serde(flatten)]
    props: BTreeMap<String, String>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props.get(prop).map(String::as_str)
    }

    pub fn set(&mut self, prop: &str, value: impl Into<String>) {
        self.props.insert(prop.to_string(), value.into());
    }

    pub fn remove(&mut self, prop: &str) {
        self.props.remove(prop);
    }

    /// Appends a box-shadow fragment, joining with any existing shadow so
    /// shadow-contributing traits and effects stack instead of overwriting
    /// one another.
    pub fn append_shadow(&mut self, fragment: &str) {
        match self.props.get_mut("box-shadow") {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(fragment);
            }
            None => self.set("box-shadow", fragment),
        }
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for StyleDeclaration {
    /// Renders the declaration in inline-style form: `prop: value; ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prop, value) in &self.props {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", prop, value)?;
            first = false;
        }
        Ok(())
    }
}

impl SpaceSize {
    pub fn css(self) -> &'static str {
        match self {
            SpaceSize::Sm => "0.5rem",
            SpaceSize::Md => "1rem",
            SpaceSize::Lg => "2rem",
            SpaceSize::Xl => "3rem",
        }
    }
}

impl GapSize {
    pub fn css(self) -> &'static str {
        match self {
            GapSize::Tight => "0.5rem",
            GapSize::Normal => "1rem",
            GapSize::Relaxed => "2rem",
        }
    }
}

impl FontSize {
    pub fn css(self) -> &'static str {
        match self {
            FontSize::Sm => "0.875rem",
            FontSize::Md => "1rem",
            FontSize::Lg => "1.5rem",
            FontSize::Xl => "2.25rem",
            FontSize::Xxl => "3rem",
        }
    }
}

impl FontWeight {
    pub fn css(self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Normal => "400",
            FontWeight::Medium => "500",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "700",
        }
    }
}

impl LetterSpacing {
    pub fn css(self) -> &'static str {
        match self {
            LetterSpacing::Tight => "-0.05em",
            LetterSpacing::Normal => "0",
            LetterSpacing::Wide => "0.1em",
        }
    }
}

impl BorderRadius {
    pub fn css(self) -> &'static str {
        match self {
            BorderRadius::None => "0",
            BorderRadius::Sm => "0.25rem",
            BorderRadius::Md => "0.5rem",
            BorderRadius::Lg => "1rem",
            BorderRadius::Full => "9999px",
        }
    }
}

impl Shadow {
    pub fn css(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Sm => "0 1px 2px rgba(0, 0, 0, 0.05)",
            Shadow::Md => "0 4px 6px rgba(0, 0, 0, 0.1)",
            Shadow::Lg => "0 10px 25px rgba(0, 0, 0, 0.15)",
            Shadow::Glow => "0 0 20px rgba(255, 215, 0, 0.4)",
        }
    }
}

impl BorderWidth {
    pub fn css(self) -> &'static str {
        match self {
            BorderWidth::None => "0",
            BorderWidth::Thin => "1px",
            BorderWidth::Medium => "2px",
            BorderWidth::Thick => "4px",
        }
    }
}

/// Marker custom property set when the particles effect is on. The page
/// layer reads these to decide whether to mount decorative overlays.
pub const PARTICLES_MARKER: &str = "--effect-particles";
/// Marker custom property set when the confetti effect is on.
pub const CONFETTI_MARKER: &str = "--effect-confetti";

/// Box-shadow fragment contributed by the glow effect flag.
pub const GLOW_FRAGMENT: &str = "0 0 20px rgba(255, 215, 0, 0.6)";

/// Builds the style half of a resolved characteristics value.
///
/// Spacing always resolves to concrete values (its documented defaults are
/// `md`/`md`/`normal`); the remaining categories contribute only the traits
/// that were actually set, leaving the rest to the template stylesheet.
pub(super) fn style_of(ch: &Characteristics) -> StyleDeclaration {
    let mut style = StyleDeclaration::new();

    let spacing = ch.spacing.unwrap_or_default();
    style.set("padding", spacing.padding.css());
    style.set("margin", spacing.margin.css());
    style.set("gap", spacing.gap.css());

    if let Some(typography) = &ch.typography {
        if let Some(family) = &typography.family {
            style.set("font-family", family.clone());
        }
        if !typography.size.is_default() {
            style.set("font-size", typography.size.css());
        }
        if !typography.weight.is_default() {
            style.set("font-weight", typography.weight.css());
        }
        if !typography.letter_spacing.is_default() {
            style.set("letter-spacing", typography.letter_spacing.css());
        }
        if typography.transform != TextTransform::None {
            style.set("text-transform", typography.transform.as_key());
        }
    }

    if let Some(shape) = ch.shape {
        if shape.border_radius != BorderRadius::None {
            style.set("border-radius", shape.border_radius.css());
        }
        if shape.shadow != Shadow::None {
            style.append_shadow(shape.shadow.css());
        }
        if shape.border_width != BorderWidth::None {
            style.set("border-width", shape.border_width.css());
            style.set("border-style", shape.border_style.as_key());
        }
    }

    if let Some(layout) = ch.layout {
        if layout.align != Align::Left {
            style.set("text-align", layout.align.as_key());
        }
        if layout.direction != Direction::Column {
            style.set("display", "flex");
            style.set("flex-direction", layout.direction.as_key());
        }
    }

    if let Some(colors) = &ch.color {
        // Verbatim pass-through, malformed values included.
        if let Some(text) = &colors.text {
            style.set("color", text.clone());
        }
        if let Some(background) = &colors.background {
            style.set("background-color", background.clone());
        }
        if let Some(border) = &colors.border {
            style.set("border-color", border.clone());
        }
        if let Some(accent) = &colors.accent {
            style.set("--accent", accent.clone());
        }
    }

    if let Some(effects) = ch.effects {
        apply_effects(&mut style, effects);
    }

    style
}

/// Applies the fixed fragment of each enabled effect flag. Fragments touch
/// disjoint properties (shadows are appended), so any combination of flags
/// yields every fragment intact.
fn apply_effects(style: &mut StyleDeclaration, effects: Effects) {
    if effects.glow {
        style.append_shadow(GLOW_FRAGMENT);
    }
    if effects.glassmorphism {
        style.set("background", "rgba(255, 255, 255, 0.1)");
        style.set("backdrop-filter", "blur(10px)");
        style.set("border", "1px solid rgba(255, 255, 255, 0.2)");
    }
    if effects.neumorphism {
        style.set("background-color", "#e0e0e0");
        style.append_shadow("20px 20px 60px #bebebe, -20px -20px 60px #ffffff");
    }
    if effects.particles {
        style.set(PARTICLES_MARKER, "1");
    }
    if effects.confetti {
        style.set(CONFETTI_MARKER, "1");
    }
}
