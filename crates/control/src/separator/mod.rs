#![allow(clippy::module_inception)]
pub mod separator;
pub mod state;

pub use separator::{
    CONTAINER_CLASS, CONTAINER_ID, ContentSeparator, INPUT_CLASS, INPUT_ID, LABEL_CLASS, LABEL_ID,
};
pub use state::SeparatorState;
