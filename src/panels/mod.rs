//! Editor control panels: stateless views over characteristics slices.
//!
//! Each panel covers one category of the characteristics record. A panel
//! never owns state: it enumerates its fields and their closed value sets
//! via [`Panel::fields`], and applies a user's change event synchronously
//! via [`Panel::apply`] — no batching, no debouncing (that is the caller's
//! choice). Out-of-range numeric input is clamped at this boundary; values
//! outside a field's closed set are a caller error.

mod error;

pub use error::PanelError;

use crate::characteristics::{
    Align, BorderRadius, BorderStyle, BorderWidth, Characteristics, DelayMs, Direction, Duration,
    Entrance, FontSize, FontWeight, GapSize, Hover, LetterSpacing, Shadow, SpaceSize,
    TextTransform,
};

/// The seven editor panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Typography,
    Color,
    Spacing,
    Shape,
    Layout,
    Animation,
    Effects,
}

/// Every panel, in the order the editor lays them out.
pub const PANELS: &[Panel] = &[
    Panel::Typography,
    Panel::Color,
    Panel::Spacing,
    Panel::Shape,
    Panel::Layout,
    Panel::Animation,
    Panel::Effects,
];

/// What kind of input a field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// One of a closed set of keys.
    Choice,
    /// An integer (clamped at the boundary).
    Number,
    /// An on/off flag.
    Toggle,
    /// Free-form text (hex colors, font stacks).
    Text,
}

/// A change event's payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInput {
    Choice(String),
    Number(i64),
    Toggle(bool),
    Text(String),
}

/// One editable field of a panel, with its closed value set when choice-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: InputKind,
    /// Legal keys for `Choice` fields; empty for other kinds.
    pub choices: &'static [&'static str],
}

const fn choice(name: &'static str, choices: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        name,
        kind: InputKind::Choice,
        choices,
    }
}

const TYPOGRAPHY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "family",
        kind: InputKind::Text,
        choices: &[],
    },
    choice("size", &["sm", "md", "lg", "xl", "xxl"]),
    choice("weight", &["light", "normal", "medium", "semibold", "bold"]),
    choice("letterSpacing", &["tight", "normal", "wide"]),
    choice("transform", &["none", "uppercase", "lowercase", "capitalize"]),
];

const COLOR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "text",
        kind: InputKind::Text,
        choices: &[],
    },
    FieldSpec {
        name: "background",
        kind: InputKind::Text,
        choices: &[],
    },
    FieldSpec {
        name: "border",
        kind: InputKind::Text,
        choices: &[],
    },
    FieldSpec {
        name: "accent",
        kind: InputKind::Text,
        choices: &[],
    },
];

const SPACING_FIELDS: &[FieldSpec] = &[
    choice("padding", &["sm", "md", "lg", "xl"]),
    choice("margin", &["sm", "md", "lg", "xl"]),
    choice("gap", &["tight", "normal", "relaxed"]),
];

const SHAPE_FIELDS: &[FieldSpec] = &[
    choice("borderRadius", &["none", "sm", "md", "lg", "full"]),
    choice("shadow", &["none", "sm", "md", "lg", "glow"]),
    choice("borderWidth", &["none", "thin", "medium", "thick"]),
    choice("borderStyle", &["solid", "dashed", "dotted"]),
];

const LAYOUT_FIELDS: &[FieldSpec] = &[
    choice("align", &["left", "center", "right"]),
    choice("direction", &["row", "column"]),
];

const ANIMATION_FIELDS: &[FieldSpec] = &[
    choice(
        "entrance",
        &[
            "none",
            "fade",
            "slide-up",
            "slide-down",
            "slide-left",
            "slide-right",
            "zoom",
            "bounce",
        ],
    ),
    choice("duration", &["fast", "normal", "slow"]),
    FieldSpec {
        name: "delay",
        kind: InputKind::Number,
        choices: &[],
    },
    choice("hover", &["none", "lift", "scale", "glow", "rotate"]),
];

const EFFECTS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "glow",
        kind: InputKind::Toggle,
        choices: &[],
    },
    FieldSpec {
        name: "glassmorphism",
        kind: InputKind::Toggle,
        choices: &[],
    },
    FieldSpec {
        name: "neumorphism",
        kind: InputKind::Toggle,
        choices: &[],
    },
    FieldSpec {
        name: "particles",
        kind: InputKind::Toggle,
        choices: &[],
    },
    FieldSpec {
        name: "confetti",
        kind: InputKind::Toggle,
        choices: &[],
    },
];

impl Panel {
    pub fn name(self) -> &'static str {
        match self {
            Panel::Typography => "typography",
            Panel::Color => "color",
            Panel::Spacing => "spacing",
            Panel::Shape => "shape",
            Panel::Layout => "layout",
            Panel::Animation => "animation",
            Panel::Effects => "effects",
        }
    }

    /// The fields this panel edits, with their closed value sets.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Panel::Typography => TYPOGRAPHY_FIELDS,
            Panel::Color => COLOR_FIELDS,
            Panel::Spacing => SPACING_FIELDS,
            Panel::Shape => SHAPE_FIELDS,
            Panel::Layout => LAYOUT_FIELDS,
            Panel::Animation => ANIMATION_FIELDS,
            Panel::Effects => EFFECTS_FIELDS,
        }
    }

    /// Applies a change event to the characteristics record, synchronously.
    ///
    /// Numeric delay input is clamped to `[0, 2000]` before being written.
    /// A field outside this panel or a value outside a field's closed set
    /// is rejected without touching the record.
    pub fn apply(
        self,
        ch: &mut Characteristics,
        field: &str,
        input: &PanelInput,
    ) -> Result<(), PanelError> {
        match self {
            Panel::Typography => apply_typography(ch, field, input),
            Panel::Color => apply_color(ch, field, input),
            Panel::Spacing => apply_spacing(ch, field, input),
            Panel::Shape => apply_shape(ch, field, input),
            Panel::Layout => apply_layout(ch, field, input),
            Panel::Animation => apply_animation(ch, field, input),
            Panel::Effects => apply_effects(ch, field, input),
        }
    }
}

fn expect_choice<'a>(
    panel: &'static str,
    field: &'static str,
    input: &'a PanelInput,
) -> Result<&'a str, PanelError> {
    match input {
        PanelInput::Choice(value) => Ok(value),
        _ => Err(PanelError::WrongKind {
            panel,
            field,
            expected: "choice",
        }),
    }
}

fn expect_toggle(
    panel: &'static str,
    field: &'static str,
    input: &PanelInput,
) -> Result<bool, PanelError> {
    match input {
        PanelInput::Toggle(on) => Ok(*on),
        _ => Err(PanelError::WrongKind {
            panel,
            field,
            expected: "toggle",
        }),
    }
}

fn expect_text<'a>(
    panel: &'static str,
    field: &'static str,
    input: &'a PanelInput,
) -> Result<&'a str, PanelError> {
    match input {
        PanelInput::Text(value) => Ok(value),
        _ => Err(PanelError::WrongKind {
            panel,
            field,
            expected: "text",
        }),
    }
}

/// Parses a choice value through the schema's closed vocabulary, rejecting
/// anything `from_key` does not recognize. This is the strict counterpart
/// of the resolver's fold-to-default policy.
fn parse<T>(
    panel: &'static str,
    field: &'static str,
    value: &str,
    from_key: fn(&str) -> Option<T>,
) -> Result<T, PanelError> {
    from_key(value).ok_or_else(|| PanelError::UnknownValue {
        panel,
        field,
        value: value.to_string(),
    })
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// Each arm parses and validates the incoming value fully before the
// category slice is materialized: a rejected event must not leave an
// empty record behind (the document would serialize differently even
// though nothing was applied).
fn apply_typography(
    ch: &mut Characteristics,
    field: &str,
    input: &PanelInput,
) -> Result<(), PanelError> {
    match field {
        "family" => {
            let family = expect_text("typography", "family", input)?.to_string();
            ch.typography.get_or_insert_with(Default::default).family = Some(family);
        }
        "size" => {
            let size = parse(
                "typography",
                "size",
                expect_choice("typography", "size", input)?,
                FontSize::from_key,
            )?;
            ch.typography.get_or_insert_with(Default::default).size = size;
        }
        "weight" => {
            let weight = parse(
                "typography",
                "weight",
                expect_choice("typography", "weight", input)?,
                FontWeight::from_key,
            )?;
            ch.typography.get_or_insert_with(Default::default).weight = weight;
        }
        "letterSpacing" => {
            let spacing = parse(
                "typography",
                "letterSpacing",
                expect_choice("typography", "letterSpacing", input)?,
                LetterSpacing::from_key,
            )?;
            ch.typography
                .get_or_insert_with(Default::default)
                .letter_spacing = spacing;
        }
        "transform" => {
            let transform = parse(
                "typography",
                "transform",
                expect_choice("typography", "transform", input)?,
                TextTransform::from_key,
            )?;
            ch.typography.get_or_insert_with(Default::default).transform = transform;
        }
        _ => {
            return Err(PanelError::UnknownField {
                panel: "typography",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_color(ch: &mut Characteristics, field: &str, input: &PanelInput) -> Result<(), PanelError> {
    let value = expect_text("color", "value", input)?;
    if !is_hex_color(value) {
        return Err(PanelError::InvalidColor {
            value: value.to_string(),
        });
    }
    let value = Some(value.to_string());
    match field {
        "text" => ch.color.get_or_insert_with(Default::default).text = value,
        "background" => ch.color.get_or_insert_with(Default::default).background = value,
        "border" => ch.color.get_or_insert_with(Default::default).border = value,
        "accent" => ch.color.get_or_insert_with(Default::default).accent = value,
        _ => {
            return Err(PanelError::UnknownField {
                panel: "color",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_spacing(
    ch: &mut Characteristics,
    field: &str,
    input: &PanelInput,
) -> Result<(), PanelError> {
    match field {
        "padding" => {
            let padding = parse(
                "spacing",
                "padding",
                expect_choice("spacing", "padding", input)?,
                SpaceSize::from_key,
            )?;
            ch.spacing.get_or_insert_with(Default::default).padding = padding;
        }
        "margin" => {
            let margin = parse(
                "spacing",
                "margin",
                expect_choice("spacing", "margin", input)?,
                SpaceSize::from_key,
            )?;
            ch.spacing.get_or_insert_with(Default::default).margin = margin;
        }
        "gap" => {
            let gap = parse(
                "spacing",
                "gap",
                expect_choice("spacing", "gap", input)?,
                GapSize::from_key,
            )?;
            ch.spacing.get_or_insert_with(Default::default).gap = gap;
        }
        _ => {
            return Err(PanelError::UnknownField {
                panel: "spacing",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_shape(ch: &mut Characteristics, field: &str, input: &PanelInput) -> Result<(), PanelError> {
    match field {
        "borderRadius" => {
            let radius = parse(
                "shape",
                "borderRadius",
                expect_choice("shape", "borderRadius", input)?,
                BorderRadius::from_key,
            )?;
            ch.shape.get_or_insert_with(Default::default).border_radius = radius;
        }
        "shadow" => {
            let shadow = parse(
                "shape",
                "shadow",
                expect_choice("shape", "shadow", input)?,
                Shadow::from_key,
            )?;
            ch.shape.get_or_insert_with(Default::default).shadow = shadow;
        }
        "borderWidth" => {
            let width = parse(
                "shape",
                "borderWidth",
                expect_choice("shape", "borderWidth", input)?,
                BorderWidth::from_key,
            )?;
            ch.shape.get_or_insert_with(Default::default).border_width = width;
        }
        "borderStyle" => {
            let style = parse(
                "shape",
                "borderStyle",
                expect_choice("shape", "borderStyle", input)?,
                BorderStyle::from_key,
            )?;
            ch.shape.get_or_insert_with(Default::default).border_style = style;
        }
        _ => {
            return Err(PanelError::UnknownField {
                panel: "shape",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_layout(
    ch: &mut Characteristics,
    field: &str,
    input: &PanelInput,
) -> Result<(), PanelError> {
    match field {
        "align" => {
            let align = parse(
                "layout",
                "align",
                expect_choice("layout", "align", input)?,
                Align::from_key,
            )?;
            ch.layout.get_or_insert_with(Default::default).align = align;
        }
        "direction" => {
            let direction = parse(
                "layout",
                "direction",
                expect_choice("layout", "direction", input)?,
                Direction::from_key,
            )?;
            ch.layout.get_or_insert_with(Default::default).direction = direction;
        }
        _ => {
            return Err(PanelError::UnknownField {
                panel: "layout",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_animation(
    ch: &mut Characteristics,
    field: &str,
    input: &PanelInput,
) -> Result<(), PanelError> {
    match field {
        "entrance" => {
            let entrance = parse(
                "animation",
                "entrance",
                expect_choice("animation", "entrance", input)?,
                Entrance::from_key,
            )?;
            ch.animations.get_or_insert_with(Default::default).entrance = entrance;
        }
        "duration" => {
            let duration = parse(
                "animation",
                "duration",
                expect_choice("animation", "duration", input)?,
                Duration::from_key,
            )?;
            ch.animations.get_or_insert_with(Default::default).duration = duration;
        }
        "delay" => {
            let requested = match input {
                PanelInput::Number(ms) => *ms,
                _ => {
                    return Err(PanelError::WrongKind {
                        panel: "animation",
                        field: "delay",
                        expected: "number",
                    })
                }
            };
            // Clamped here, before the change lands in the record.
            ch.animations.get_or_insert_with(Default::default).delay = DelayMs::clamped(requested);
        }
        "hover" => {
            let hover = parse(
                "animation",
                "hover",
                expect_choice("animation", "hover", input)?,
                Hover::from_key,
            )?;
            ch.animations.get_or_insert_with(Default::default).hover = hover;
        }
        _ => {
            return Err(PanelError::UnknownField {
                panel: "animation",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_effects(
    ch: &mut Characteristics,
    field: &str,
    input: &PanelInput,
) -> Result<(), PanelError> {
    let on = expect_toggle("effects", "flag", input)?;
    match field {
        "glow" => ch.effects.get_or_insert_with(Default::default).glow = on,
        "glassmorphism" => ch.effects.get_or_insert_with(Default::default).glassmorphism = on,
        "neumorphism" => ch.effects.get_or_insert_with(Default::default).neumorphism = on,
        "particles" => ch.effects.get_or_insert_with(Default::default).particles = on,
        "confetti" => ch.effects.get_or_insert_with(Default::default).confetti = on,
        _ => {
            return Err(PanelError::UnknownField {
                panel: "effects",
                field: field.to_string(),
            })
        }
    }
    Ok(())
}
