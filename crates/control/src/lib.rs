//! Embeddable split-value field control.
//!
//! This crate implements a host-managed field widget around one stored text
//! value of the shape `left SEPARATOR right`. The widget shows exactly one
//! half in a single-line input, keeps the other half intact, and rebuilds
//! the stored value after every keystroke.
//!
//! Hosts drive a control through the [`FieldControl`] lifecycle: build it
//! into a [`Mount`] with `init`, forward focused key events, and pull fresh
//! values through `outputs` whenever the control signals
//! [`HostServices::output_changed`]. Rendering is a separate adapter over
//! the mounted element tree (see [`render`]).

pub mod context;
pub mod control;
pub mod editor;
pub mod host;
pub mod mount;
pub mod render;
pub mod separator;

pub use context::Context;
pub use control::FieldControl;
pub use editor::LineEditor;
pub use host::HostServices;
pub use mount::{Element, ElementKind, Mount};
pub use separator::{ContentSeparator, SeparatorState};
