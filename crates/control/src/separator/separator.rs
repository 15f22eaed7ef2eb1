//! The content separator field control.
//!
//! Presents one half of a stored `left SEPARATOR right` value in a
//! single-line input, keeps the other half intact, and rebuilds the stored
//! value after every keystroke while the input is enabled. An optional
//! caption label shows the matching half of a separate label text.

use crossterm::event::{KeyEvent, KeyEventKind};
use splitfield_types::{ControlManifest, Outputs, ParamKind, ParamSpec, param};
use tracing::{debug, warn};

use super::state::SeparatorState;
use crate::context::Context;
use crate::control::FieldControl;
use crate::host::HostServices;
use crate::mount::{Element, Mount};

/// Id given to the grouping container element.
pub const CONTAINER_ID: &str = "mycontainer";
/// Class given to the grouping container element.
pub const CONTAINER_CLASS: &str = "mycontainer";
/// Id given to the caption label element.
pub const LABEL_ID: &str = "label";
/// Class given to the caption label element.
pub const LABEL_CLASS: &str = "mylabel";
/// Id given to the text input element.
pub const INPUT_ID: &str = "Input";
/// Class given to the text input element.
pub const INPUT_CLASS: &str = "myinput";

/// Field control that edits one half of a separator-delimited value.
///
/// Until `init` runs the control holds no state and its outputs are empty
/// text under the bound value name.
#[derive(Debug, Default)]
pub struct ContentSeparator {
    state: Option<SeparatorState>,
}

impl ContentSeparator {
    /// Creates a control awaiting initialization.
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameter and output schema this control declares to hosts.
    pub fn manifest() -> ControlManifest {
        ControlManifest {
            name: "ContentSeparator".to_string(),
            params: vec![
                ParamSpec::input(param::LEFT_CONTENT, ParamKind::Bool)
                    .with_description("Work with the half before the separator"),
                ParamSpec::input(param::EDIT_MODE, ParamKind::Bool)
                    .with_description("Allow the displayed half to be edited"),
                ParamSpec::input(param::SEPARATOR, ParamKind::Text)
                    .with_default(",")
                    .with_description("Token the stored value is split around"),
                ParamSpec::bound(param::CONTENT_SEPARATOR_VALUE, ParamKind::Text)
                    .with_description("The stored combined value"),
                ParamSpec::input(param::LABEL_VALUE, ParamKind::Text)
                    .with_description("Text the caption label is derived from"),
                ParamSpec::input(param::LABEL_DISPLAY, ParamKind::Bool)
                    .with_description("Show the caption label"),
            ],
            outputs: vec![param::CONTENT_SEPARATOR_VALUE.to_string()],
        }
    }

    /// The control's state, once `init` has run.
    pub fn state(&self) -> Option<&SeparatorState> {
        self.state.as_ref()
    }
}

impl FieldControl for ContentSeparator {
    fn init(&mut self, context: &Context, host: &mut dyn HostServices, mount: &mut Mount) {
        let state = SeparatorState::load(context.parameters());
        debug!(
            separator = %state.separator,
            show_left = state.show_left,
            edit_mode = state.edit_mode,
            "initializing content separator"
        );

        mount.append(Element::container(CONTAINER_ID, CONTAINER_CLASS));

        // The caption is derived even when it stays hidden, so a bad label
        // text is reported either way.
        match state.label_message() {
            Ok(message) => {
                if state.show_label {
                    let mut label = Element::label(LABEL_ID, LABEL_CLASS);
                    label.set_text(message);
                    mount.append(label);
                }
            }
            Err(error) => {
                warn!(%error, "caption label skipped");
                host.report_error(error);
            }
        }

        let mut input = Element::input(INPUT_ID, INPUT_CLASS);
        input.set_disabled(!state.edit_mode);
        match state.display_value() {
            Some(value) => input.set_value(&value),
            None => debug!("stored value has fewer than two segments; input left unset"),
        }
        mount.append(input);

        self.state = Some(state);
    }

    fn update_view(&mut self, _context: &Context) {
        debug!("update_view ignored; bound values are captured at init");
    }

    fn outputs(&self) -> Outputs {
        let value = self
            .state
            .as_ref()
            .map(|state| state.combined_value.clone())
            .unwrap_or_default();
        Outputs::new().bind(param::CONTENT_SEPARATOR_VALUE, value)
    }

    fn destroy(&mut self) {
        debug!("destroying content separator");
    }

    fn handle_key(&mut self, key: KeyEvent, host: &mut dyn HostServices, mount: &mut Mount) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(input) = mount.element_mut(INPUT_ID) else {
            return;
        };
        // A disabled input never produces key events.
        if input.is_disabled() {
            return;
        }
        let Some(editor) = input.editor_mut() else {
            return;
        };

        editor.apply_key(key);
        let updated = editor.value().to_string();

        // Every keystroke recombines, including ones that left the buffer
        // as it was; the stored value is re-spaced each time.
        match state.recombine(&updated) {
            Ok(()) => host.output_changed(),
            Err(error) => {
                warn!(%error, "edit not folded into the stored value");
                host.report_error(error);
            }
        }
    }
}
