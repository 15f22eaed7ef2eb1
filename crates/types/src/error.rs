//! Error types reported through the host fault channel.

use thiserror::Error;

/// Recoverable faults raised while building the view or applying an edit.
///
/// None of these abort the control lifecycle. The control reports the fault
/// to its host and continues with the state it already holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The label text has no split point, so no half could be selected.
    #[error("label text {text:?} does not contain separator {separator:?}")]
    LabelSeparatorMissing { text: String, separator: String },

    /// The stored value has no split point, so the edited half could not be
    /// recombined with the preserved half.
    #[error("stored value {value:?} does not contain separator {separator:?}")]
    ValueSeparatorMissing { value: String, separator: String },
}

impl ControlError {
    /// Create a label separator missing error.
    pub fn label_separator_missing(text: impl Into<String>, separator: impl Into<String>) -> Self {
        Self::LabelSeparatorMissing {
            text: text.into(),
            separator: separator.into(),
        }
    }

    /// Create a value separator missing error.
    pub fn value_separator_missing(value: impl Into<String>, separator: impl Into<String>) -> Self {
        Self::ValueSeparatorMissing {
            value: value.into(),
            separator: separator.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_error_creation() {
        let err = ControlError::label_separator_missing("Team", ",");
        assert!(matches!(err, ControlError::LabelSeparatorMissing { .. }));

        let err = ControlError::value_separator_missing("single segment", "|");
        assert!(matches!(err, ControlError::ValueSeparatorMissing { .. }));
    }

    #[test]
    fn test_control_error_display_names_the_separator() {
        let err = ControlError::value_separator_missing("abc", ",");
        let text = err.to_string();
        assert!(text.contains("\"abc\""), "display should quote the value: {text}");
        assert!(text.contains("\",\""), "display should quote the separator: {text}");
    }
}
