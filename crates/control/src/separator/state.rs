//! State for the content separator control.
//!
//! `SeparatorState` is captured once from the parameter bag during `init`
//! and is the single source of truth afterwards. The combined value evolves
//! only through [`SeparatorState::recombine`]; host-side refreshes never
//! touch it. Splitting always addresses the first two segments, so a value
//! holding the separator more than once loses everything past the second
//! segment on the first edit.

use splitfield_types::{ControlError, ParameterBag, param};

/// Configuration and value state for one mounted control instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorState {
    /// Work with the half before the separator instead of the half after it
    pub show_left: bool,
    /// Whether the input accepts edits
    pub edit_mode: bool,
    /// Token the combined value is split around
    pub separator: String,
    /// The full stored value, both halves and separator included
    pub combined_value: String,
    /// Raw text the caption label is derived from
    pub label_text: String,
    /// Whether the caption label is rendered
    pub show_label: bool,
}

impl SeparatorState {
    /// Reads typed parameters out of the bag, substituting defaults for
    /// anything absent, mistyped, or empty.
    pub fn load(parameters: &ParameterBag) -> Self {
        Self {
            show_left: parameters.bool_or(param::LEFT_CONTENT, false),
            edit_mode: parameters.bool_or(param::EDIT_MODE, false),
            separator: parameters.text_or(param::SEPARATOR, ","),
            combined_value: parameters.text_or(param::CONTENT_SEPARATOR_VALUE, ""),
            label_text: parameters.text_or(param::LABEL_VALUE, ""),
            show_label: parameters.bool_or(param::LABEL_DISPLAY, false),
        }
    }

    /// The half of the stored value the control presents, trimmed.
    ///
    /// Returns `None` when the stored value splits into fewer than two
    /// segments; the input is then left unset.
    pub fn display_value(&self) -> Option<String> {
        let mut segments = self.combined_value.split(self.separator.as_str());
        let first = segments.next()?;
        let second = segments.next()?;
        let half = if self.show_left { first } else { second };
        Some(half.trim().to_string())
    }

    /// Builds the caption shown with the input: the selected half of the
    /// label text, trimmed and parenthesized.
    ///
    /// The left half of a text without any separator is the whole text, so
    /// only the right-half selection can fail here.
    pub fn label_message(&self) -> Result<String, ControlError> {
        let mut segments = self.label_text.split(self.separator.as_str());
        let selected = if self.show_left {
            segments.next()
        } else {
            segments.nth(1)
        };
        match selected {
            Some(half) => Ok(format!("({})", half.trim())),
            None => Err(ControlError::label_separator_missing(
                &self.label_text,
                &self.separator,
            )),
        }
    }

    /// Folds an edited half back into the stored value.
    ///
    /// The preserved half is re-split out of the current stored value and
    /// trimmed; the result is always re-spaced as
    /// `left + " " + separator + " " + right`. Editing the left half
    /// requires a second segment to preserve, while editing the right half
    /// treats everything before the first separator (or the whole value) as
    /// the left half.
    pub fn recombine(&mut self, updated: &str) -> Result<(), ControlError> {
        let mut segments = self.combined_value.split(self.separator.as_str());
        let first = segments.next().unwrap_or("");
        let second = segments.next();

        let combined = if self.show_left {
            let Some(second) = second else {
                return Err(ControlError::value_separator_missing(
                    &self.combined_value,
                    &self.separator,
                ));
            };
            format!("{} {} {}", updated, self.separator, second.trim())
        } else {
            format!("{} {} {}", first.trim(), self.separator, updated)
        };

        self.combined_value = combined;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(value: &str, show_left: bool) -> SeparatorState {
        SeparatorState {
            show_left,
            edit_mode: true,
            separator: ",".to_string(),
            combined_value: value.to_string(),
            ..SeparatorState::default()
        }
    }

    #[test]
    fn load_applies_defaults_on_empty_bag() {
        let state = SeparatorState::load(&ParameterBag::new());
        assert!(!state.show_left);
        assert!(!state.edit_mode);
        assert_eq!(state.separator, ",");
        assert_eq!(state.combined_value, "");
        assert_eq!(state.label_text, "");
        assert!(!state.show_label);
    }

    #[test]
    fn load_reads_typed_values() {
        let bag = ParameterBag::new()
            .with(param::LEFT_CONTENT, true)
            .with(param::EDIT_MODE, true)
            .with(param::SEPARATOR, "|")
            .with(param::CONTENT_SEPARATOR_VALUE, "a | b")
            .with(param::LABEL_VALUE, "First|Last")
            .with(param::LABEL_DISPLAY, true);

        let state = SeparatorState::load(&bag);
        assert!(state.show_left);
        assert!(state.edit_mode);
        assert_eq!(state.separator, "|");
        assert_eq!(state.combined_value, "a | b");
        assert_eq!(state.label_text, "First|Last");
        assert!(state.show_label);
    }

    #[test]
    fn display_value_selects_and_trims_each_half() {
        assert_eq!(
            state("Hello , World", true).display_value().as_deref(),
            Some("Hello")
        );
        assert_eq!(
            state("Hello , World", false).display_value().as_deref(),
            Some("World")
        );
    }

    #[test]
    fn display_value_requires_two_segments() {
        assert_eq!(state("justonevalue", true).display_value(), None);
        assert_eq!(state("", false).display_value(), None);
    }

    #[test]
    fn display_value_takes_the_second_segment_not_the_rest() {
        assert_eq!(state("a,b,c", false).display_value().as_deref(), Some("b"));
    }

    #[test]
    fn label_message_wraps_the_selected_half() {
        let mut st = state("", true);
        st.label_text = " First , Last ".to_string();
        assert_eq!(st.label_message().as_deref(), Ok("(First)"));

        st.show_left = false;
        assert_eq!(st.label_message().as_deref(), Ok("(Last)"));
    }

    #[test]
    fn label_message_without_separator_only_fails_on_the_right() {
        let mut st = state("", true);
        st.label_text = "solo".to_string();
        assert_eq!(st.label_message().as_deref(), Ok("(solo)"));

        st.show_left = false;
        assert_eq!(
            st.label_message(),
            Err(ControlError::label_separator_missing("solo", ","))
        );
    }

    #[test]
    fn recombine_respaces_around_the_separator() {
        let mut st = state("Hello , World", true);
        st.recombine("Goodbye").expect("left edit folds in");
        assert_eq!(st.combined_value, "Goodbye , World");

        let mut st = state("Hello,World", false);
        st.recombine("Moon").expect("right edit folds in");
        assert_eq!(st.combined_value, "Hello , Moon");
    }

    #[test]
    fn recombine_left_requires_a_second_segment() {
        let mut st = state("abc", true);
        assert_eq!(
            st.recombine("x"),
            Err(ControlError::value_separator_missing("abc", ","))
        );
        assert_eq!(st.combined_value, "abc", "failed edit leaves the value alone");
    }

    #[test]
    fn recombine_right_treats_a_whole_value_as_the_left_half() {
        let mut st = state("abc", false);
        st.recombine("y").expect("right edit folds in");
        assert_eq!(st.combined_value, "abc , y");
    }

    #[test]
    fn recombine_drops_segments_past_the_second() {
        let mut st = state("a,b,c", true);
        st.recombine("x").expect("left edit folds in");
        assert_eq!(st.combined_value, "x , b");
    }

    #[test]
    fn multi_char_separator_splits_and_rejoins() {
        let mut st = state("one :: two", true);
        st.separator = "::".to_string();
        assert_eq!(st.display_value().as_deref(), Some("one"));
        st.recombine("three").expect("left edit folds in");
        assert_eq!(st.combined_value, "three :: two");
    }
}
