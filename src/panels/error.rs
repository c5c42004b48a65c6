//! Control panel input errors.

use thiserror::Error;

/// Error raised when a change event carries an illegal field or value.
///
/// These are caller errors: the panels enumerate closed value sets, and
/// anything outside them is rejected at the boundary instead of being
/// written into the characteristics record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("panel '{panel}' has no field '{field}'")]
    UnknownField { panel: &'static str, field: String },

    #[error("'{value}' is not a legal value for {panel}.{field}")]
    UnknownValue {
        panel: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{panel}.{field} expects a {expected} input")]
    WrongKind {
        panel: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("'{value}' is not a hex color")]
    InvalidColor { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = PanelError::UnknownValue {
            panel: "animation",
            field: "entrance",
            value: "wobble".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("animation.entrance"));
        assert!(msg.contains("wobble"));

        let err = PanelError::InvalidColor {
            value: "red-ish".into(),
        };
        assert!(err.to_string().contains("red-ish"));
    }
}
