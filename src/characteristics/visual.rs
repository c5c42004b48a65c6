//! Spacing, typography, shape, layout and color traits.

use serde::{Deserialize, Serialize};

trait_enum! {
    /// Padding and margin scale.
    SpaceSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default: Md
}

trait_enum! {
    /// Gap between children of a section.
    GapSize {
        Tight => "tight",
        Normal => "normal",
        Relaxed => "relaxed",
    }
    default: Normal
}

trait_enum! {
    FontSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "xxl",
    }
    default: Md
}

trait_enum! {
    FontWeight {
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
    default: Normal
}

trait_enum! {
    LetterSpacing {
        Tight => "tight",
        Normal => "normal",
        Wide => "wide",
    }
    default: Normal
}

trait_enum! {
    TextTransform {
        None => "none",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
        Capitalize => "capitalize",
    }
    default: None
}

trait_enum! {
    BorderRadius {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Full => "full",
    }
    default: None
}

trait_enum! {
    Shadow {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Glow => "glow",
    }
    default: None
}

trait_enum! {
    BorderWidth {
        None => "none",
        Thin => "thin",
        Medium => "medium",
        Thick => "thick",
    }
    default: None
}

trait_enum! {
    BorderStyle {
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
    }
    default: Solid
}

trait_enum! {
    Align {
        Left => "left",
        Center => "center",
        Right => "right",
    }
    default: Left
}

trait_enum! {
    Direction {
        Row => "row",
        Column => "column",
    }
    default: Column
}

/// The spacing slice of a characteristics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    #[serde(skip_serializing_if = "SpaceSize::is_default")]
    pub padding: SpaceSize,
    #[serde(skip_serializing_if = "SpaceSize::is_default")]
    pub margin: SpaceSize,
    #[serde(skip_serializing_if = "GapSize::is_default")]
    pub gap: GapSize,
}

/// The typography slice of a characteristics record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    /// Free-form font stack, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "FontSize::is_default")]
    pub size: FontSize,
    #[serde(skip_serializing_if = "FontWeight::is_default")]
    pub weight: FontWeight,
    #[serde(skip_serializing_if = "LetterSpacing::is_default")]
    pub letter_spacing: LetterSpacing,
    #[serde(skip_serializing_if = "TextTransform::is_default")]
    pub transform: TextTransform,
}

/// The shape slice of a characteristics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shape {
    #[serde(skip_serializing_if = "BorderRadius::is_default")]
    pub border_radius: BorderRadius,
    #[serde(skip_serializing_if = "Shadow::is_default")]
    pub shadow: Shadow,
    #[serde(skip_serializing_if = "BorderWidth::is_default")]
    pub border_width: BorderWidth,
    #[serde(skip_serializing_if = "BorderStyle::is_default")]
    pub border_style: BorderStyle,
}

/// The layout slice of a characteristics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Align::is_default")]
    pub align: Align,
    #[serde(skip_serializing_if = "Direction::is_default")]
    pub direction: Direction,
}

/// Color traits. Values are hex strings passed through verbatim; format
/// validation is the color panel's concern, never the resolver's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTraits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}
