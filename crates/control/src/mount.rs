//! Retained element tree a control builds under a host-provided mount.
//!
//! The host owns the mount and hands it to the control at `init`; the
//! control appends elements there and mutates them afterwards by id lookup.
//! Drawing the tree is a separate concern (see [`crate::render`]).

use crate::editor::LineEditor;

/// A renderable element created by a control.
#[derive(Debug, Clone)]
pub struct Element {
    id: String,
    class: String,
    kind: ElementKind,
}

/// The element kinds a field control can create.
#[derive(Debug, Clone)]
pub enum ElementKind {
    /// Block-level grouping element; children render in order.
    Container { children: Vec<Element> },
    /// Static caption text.
    Label { text: String },
    /// Single-line text input with its own edit buffer.
    Input { editor: LineEditor, disabled: bool },
}

impl Element {
    /// Creates an empty container element.
    pub fn container(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            kind: ElementKind::Container { children: Vec::new() },
        }
    }

    /// Creates a label element with no text yet.
    pub fn label(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            kind: ElementKind::Label { text: String::new() },
        }
    }

    /// Creates an enabled input element with an empty buffer.
    pub fn input(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            kind: ElementKind::Input {
                editor: LineEditor::new(),
                disabled: false,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Caption text, when this element is a label.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Label { text } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Replaces the caption text. Ignored for non-label elements.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let ElementKind::Label { text: current } = &mut self.kind {
            *current = text.into();
        }
    }

    /// Current buffer contents, when this element is an input.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Input { editor, .. } => Some(editor.value()),
            _ => None,
        }
    }

    /// Replaces the input buffer, parking the cursor at the end. Ignored
    /// for non-input elements.
    pub fn set_value(&mut self, value: &str) {
        if let ElementKind::Input { editor, .. } = &mut self.kind {
            editor.set_value(value);
        }
    }

    /// Whether this element is an input with editing switched off.
    pub fn is_disabled(&self) -> bool {
        matches!(&self.kind, ElementKind::Input { disabled: true, .. })
    }

    /// Enables or disables an input element. Ignored otherwise.
    pub fn set_disabled(&mut self, value: bool) {
        if let ElementKind::Input { disabled, .. } = &mut self.kind {
            *disabled = value;
        }
    }

    /// Shared access to an input's edit buffer.
    pub fn editor(&self) -> Option<&LineEditor> {
        match &self.kind {
            ElementKind::Input { editor, .. } => Some(editor),
            _ => None,
        }
    }

    /// Mutable access to an input's edit buffer.
    pub fn editor_mut(&mut self) -> Option<&mut LineEditor> {
        match &mut self.kind {
            ElementKind::Input { editor, .. } => Some(editor),
            _ => None,
        }
    }

    /// Appends a child to a container element. Ignored otherwise.
    pub fn append_child(&mut self, child: Element) {
        if let ElementKind::Container { children } = &mut self.kind {
            children.push(child);
        }
    }

    /// Children of a container element; empty for every other kind.
    pub fn children(&self) -> &[Element] {
        match &self.kind {
            ElementKind::Container { children } => children.as_slice(),
            _ => &[],
        }
    }
}

/// Host-provided attachment point for a control's elements.
#[derive(Debug, Clone, Default)]
pub struct Mount {
    children: Vec<Element>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level element in document order.
    pub fn append(&mut self, element: Element) {
        self.children.push(element);
    }

    /// Top-level elements in append order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Finds an element by id anywhere in the tree.
    pub fn element(&self, id: &str) -> Option<&Element> {
        find(&self.children, id)
    }

    /// Finds an element by id anywhere in the tree, mutably.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_mut(&mut self.children, id)
    }

    /// Drops every mounted element. Hosts call this after `destroy`.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

fn find<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    for element in elements {
        if element.id == id {
            return Some(element);
        }
        if let ElementKind::Container { children } = &element.kind
            && let Some(found) = find(children, id)
        {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a>(elements: &'a mut [Element], id: &str) -> Option<&'a mut Element> {
    for element in elements.iter_mut() {
        if element.id == id {
            return Some(element);
        }
        if let ElementKind::Container { children } = &mut element.kind
            && let Some(found) = find_mut(children, id)
        {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_descends_into_containers() {
        let mut wrapper = Element::container("outer", "wrap");
        wrapper.append_child(Element::label("inner", "caption"));

        let mut mount = Mount::new();
        mount.append(wrapper);
        mount.append(Element::input("field", "field"));

        assert_eq!(mount.element("inner").map(Element::class), Some("caption"));
        assert!(mount.element("missing").is_none());

        mount.element_mut("inner").unwrap().set_text("(Hi)");
        assert_eq!(mount.element("inner").unwrap().text(), Some("(Hi)"));
    }

    #[test]
    fn input_accessors() {
        let mut input = Element::input("field", "field");
        assert_eq!(input.value(), Some(""));
        assert!(!input.is_disabled());

        input.set_value("Hello");
        input.set_disabled(true);
        assert_eq!(input.value(), Some("Hello"));
        assert!(input.is_disabled());
        assert_eq!(input.editor().unwrap().cursor(), 5);
    }

    #[test]
    fn kind_specific_setters_ignore_other_kinds() {
        let mut label = Element::label("caption", "caption");
        label.set_value("nope");
        label.set_disabled(true);
        assert_eq!(label.value(), None);
        assert!(!label.is_disabled());

        let mut input = Element::input("field", "field");
        input.set_text("nope");
        assert_eq!(input.text(), None);
        assert_eq!(input.value(), Some(""));
    }
}
