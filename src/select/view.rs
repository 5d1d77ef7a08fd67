//! Element-tree construction for the select widget.

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::styles::Stylesheet;
use crate::types::{Direction, Position};

use super::state::{SelectConfig, SelectData};
use super::SelectOption;

/// ID of a select's control surface element.
pub fn control_id(select_id: &str) -> String {
    format!("{select_id}-control")
}

/// ID of a select's dropdown menu element.
pub fn menu_id(select_id: &str) -> String {
    format!("{select_id}-menu")
}

/// ID of one option element inside a select's menu.
pub fn option_id(select_id: &str, index: usize) -> String {
    format!("{select_id}-opt-{index}")
}

/// Build the whole widget subtree: the focusable container, the control row
/// (selection summary + arrow marker), and — while open — the absolutely
/// positioned menu listing every option in declaration order.
pub(crate) fn build_select(
    id: &str,
    data: &SelectData,
    options: &[SelectOption],
    config: &SelectConfig,
    styles: &Stylesheet,
) -> Element {
    // Label shows the raw selected tokens, stale ones included.
    let label = if data.selection().is_empty() {
        config.placeholder.clone()
    } else {
        data.selection().join(", ")
    };

    let arrow = if data.open {
        config
            .arrow_open
            .clone()
            .unwrap_or_else(|| Element::text("▲"))
    } else {
        config
            .arrow_closed
            .clone()
            .unwrap_or_else(|| Element::text("▼"))
    };

    let control = Element::row()
        .id(control_id(id))
        .clickable(true)
        .gap(1)
        .data("select", id)
        .data("part", "control")
        .style(styles.control)
        .child(Element::text(label))
        .child(arrow);

    let mut root = Element::col()
        .id(id)
        .focusable(true)
        .style(styles.select)
        .data("role", "select");
    for (key, value) in &config.attrs {
        root = root.data(key, value);
    }
    root = root.child(control);

    if data.open {
        let mut menu = Element::col()
            .id(menu_id(id))
            .position(Position::Absolute)
            .top(1)
            .z_index(100)
            .min_width(menu_width(options, data.is_multiple()))
            .style(styles.menu);
        for (index, option) in options.iter().enumerate() {
            menu = menu.child(option_element(id, index, option, data, styles));
        }
        root = root.child(menu);
    }

    root
}

/// Build one option row. Selected, disabled, and highlight styles merge
/// independently over the base option style, so any combination can apply.
fn option_element(
    select_id: &str,
    index: usize,
    option: &SelectOption,
    data: &SelectData,
    styles: &Stylesheet,
) -> Element {
    let selected = data.is_selected(&option.value);
    let highlighted = data.highlight == Some(index);

    let mut style = styles.option;
    if selected {
        style = style.merge(&styles.selected);
    }
    if option.disabled {
        style = style.merge(&styles.disabled);
    }
    if highlighted {
        style = style.merge(&styles.highlight);
    }

    let mut row = Element::row()
        .id(option_id(select_id, index))
        .clickable(true)
        .gap(1)
        .disabled(option.disabled)
        .data("select", select_id)
        .data("part", "option")
        .data("value", &option.value)
        .style(style);
    if option.disabled {
        row = row.data("aria-disabled", "true");
    }
    for (key, value) in &option.attrs {
        row = row.data(key, value);
    }

    if data.is_multiple() {
        row = row.child(Element::text(if selected { "[x]" } else { "[ ]" }));
    }
    row.child(option.content.clone())
}

/// Widest option content in display cells, plus room for the multi-mode
/// marker. Keeps state-style backgrounds spanning the whole menu row.
fn menu_width(options: &[SelectOption], multiple: bool) -> u16 {
    let marker = if multiple { 4 } else { 0 };
    options
        .iter()
        .map(|o| content_width(&o.content) + marker)
        .max()
        .unwrap_or(0)
}

fn content_width(element: &Element) -> u16 {
    match &element.content {
        Content::None => 0,
        Content::Text(text) => UnicodeWidthStr::width(text.as_str()) as u16,
        Content::Children(children) => match element.direction {
            Direction::Row => {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                children.iter().map(content_width).sum::<u16>() + gaps
            }
            Direction::Column => children.iter().map(content_width).max().unwrap_or(0),
        },
    }
}
