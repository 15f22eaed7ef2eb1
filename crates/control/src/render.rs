//! Ratatui adapter for a mounted element tree.
//!
//! Hosts that draw with ratatui hand the mount to [`render_mount`] once per
//! frame. Containers stack their children vertically, labels take one row,
//! and inputs draw as bordered single-line fields. An enabled input places
//! the terminal cursor at its cursor column.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::mount::{Element, ElementKind, Mount};

/// Draws every mounted element top to bottom within `area`.
pub fn render_mount(frame: &mut Frame, area: Rect, mount: &Mount) {
    render_stack(frame, area, mount.children());
}

/// Total rows the mounted tree needs at full height.
pub fn mount_height(mount: &Mount) -> u16 {
    mount.children().iter().map(element_height).sum()
}

fn render_stack(frame: &mut Frame, area: Rect, elements: &[Element]) {
    if elements.is_empty() || area.height == 0 {
        return;
    }
    let constraints: Vec<Constraint> = elements
        .iter()
        .map(|element| Constraint::Length(element_height(element)))
        .collect();
    let rows = Layout::vertical(constraints).split(area);
    for (element, row) in elements.iter().zip(rows.iter()) {
        render_element(frame, *row, element);
    }
}

fn element_height(element: &Element) -> u16 {
    match element.kind() {
        ElementKind::Container { children } => children.iter().map(element_height).sum(),
        ElementKind::Label { .. } => 1,
        ElementKind::Input { .. } => 3,
    }
}

fn render_element(frame: &mut Frame, area: Rect, element: &Element) {
    match element.kind() {
        ElementKind::Container { children } => render_stack(frame, area, children),
        ElementKind::Label { text } => {
            let caption = Paragraph::new(text.as_str())
                .style(Style::default().add_modifier(Modifier::ITALIC));
            frame.render_widget(caption, area);
        }
        ElementKind::Input { editor, disabled } => {
            let block = Block::default().borders(Borders::ALL);
            let inner = block.inner(area);
            let style = if *disabled {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            let field = Paragraph::new(editor.value()).style(style).block(block);
            frame.render_widget(field, area);

            if !*disabled && inner.width > 0 {
                let col = cursor_columns(editor.value(), editor.cursor());
                let x = inner
                    .x
                    .saturating_add(col)
                    .min(inner.right().saturating_sub(1));
                frame.set_cursor_position((x, inner.y));
            }
        }
    }
}

/// Display columns occupied by the text before the cursor byte index.
fn cursor_columns(value: &str, cursor: usize) -> u16 {
    value
        .get(..cursor)
        .map(|prefix| UnicodeWidthStr::width(prefix) as u16)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_columns_use_display_width() {
        let value = "日本x"; // two double-width chars then one narrow
        assert_eq!(cursor_columns(value, 0), 0);
        assert_eq!(cursor_columns(value, 3), 2);
        assert_eq!(cursor_columns(value, 6), 4);
        assert_eq!(cursor_columns(value, 7), 5);
    }

    #[test]
    fn element_heights_stack() {
        let mut wrapper = Element::container("outer", "wrap");
        assert_eq!(element_height(&wrapper), 0);

        wrapper.append_child(Element::label("caption", "caption"));
        wrapper.append_child(Element::input("field", "field"));
        assert_eq!(element_height(&wrapper), 4);

        let mut mount = Mount::new();
        mount.append(wrapper);
        assert_eq!(mount_height(&mount), 4);
    }
}
