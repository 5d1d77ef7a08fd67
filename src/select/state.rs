//! Select widget state and event processing.

use std::collections::HashMap;

use crate::element::{contains_element, find_element, Element};
use crate::event::{Event, Key, SelectValue};
use crate::styles::ensure_styles;
use crate::subscription::{PointerRegistry, PointerSubscription};

use super::view::build_select;
use super::SelectOption;

/// Snapshot of one declared option: just what keyboard navigation and
/// Enter need. Captured from the most recent `view` call.
#[derive(Debug, Clone)]
pub(crate) struct DeclaredOption {
    pub(crate) value: String,
    pub(crate) disabled: bool,
}

/// Per-instance state for a single select.
///
/// The control mode is fixed at construction: an uncontrolled select commits
/// every toggle to its own selection, a controlled one treats the stored
/// selection as a projection of the external value and only emits change
/// events — the host syncs it back through [`SelectState::set_value`].
#[derive(Debug, Clone, Default)]
pub struct SelectData {
    /// Whether the dropdown menu is visible.
    pub open: bool,
    /// Keyboard cursor into the declared option list. Only meaningful while
    /// open; reset to `None` on every close path.
    pub highlight: Option<usize>,
    selection: Vec<String>,
    multiple: bool,
    controlled: bool,
    declared: Vec<DeclaredOption>,
}

impl SelectData {
    /// Uncontrolled, single-select, empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to multi-select semantics.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Make the selection a projection of an externally owned value.
    pub fn controlled(mut self) -> Self {
        self.controlled = true;
        self
    }

    /// Seed the initial selection.
    pub fn with_selection(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selection = values.into_iter().map(Into::into).collect();
        self
    }

    /// Currently selected value tokens, in selection order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.iter().any(|v| v == value)
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }
}

/// Container configuration: placeholder text, open/closed arrow markers,
/// pass-through container attributes.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub placeholder: String,
    pub arrow_open: Option<Element>,
    pub arrow_closed: Option<Element>,
    pub attrs: HashMap<String, String>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select an option".into(),
            arrow_open: None,
            arrow_closed: None,
            attrs: HashMap::new(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn arrow_open(mut self, marker: Element) -> Self {
        self.arrow_open = Some(marker);
        self
    }

    pub fn arrow_closed(mut self, marker: Element) -> Self {
        self.arrow_closed = Some(marker);
        self
    }

    /// Add a pass-through data attribute on the container.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug)]
struct Entry {
    data: SelectData,
    _subscription: PointerSubscription,
}

/// Outcome of routing a key press to a select.
enum KeyOutcome {
    /// Key was handled; swallow it (the `preventDefault` analog).
    Consumed,
    /// Key was handled and produced a change event.
    Emitted(Event),
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Tracks state for multiple selects and processes targeted events.
///
/// Mounting a select (explicitly via [`insert`](Self::insert) or implicitly
/// on its first [`view`](Self::view)) installs the process-wide stylesheet
/// and registers a pointer-down subscription for outside-click detection;
/// removal releases the subscription deterministically.
#[derive(Debug, Default)]
pub struct SelectState {
    selects: HashMap<String, Entry>,
    registry: PointerRegistry,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a select with explicit construction-time configuration.
    pub fn insert(&mut self, id: impl Into<String>, data: SelectData) {
        let id = id.into();
        ensure_styles();
        // Drop any previous entry first so its subscription release cannot
        // clobber the fresh registration under the same ID.
        self.selects.remove(&id);
        let subscription = self.registry.subscribe(id.clone());
        log::debug!("[select] mount {id}");
        self.selects.insert(
            id,
            Entry {
                data,
                _subscription: subscription,
            },
        );
    }

    /// Unmount a select, releasing its pointer subscription.
    pub fn remove(&mut self, id: &str) -> Option<SelectData> {
        let entry = self.selects.remove(id);
        if entry.is_some() {
            log::debug!("[select] unmount {id}");
        }
        entry.map(|e| e.data)
    }

    pub fn get(&self, id: &str) -> Option<&SelectData> {
        self.selects.get(id).map(|e| &e.data)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SelectData> {
        self.selects.get_mut(id).map(|e| &mut e.data)
    }

    /// Selection of a select, empty for unknown IDs.
    pub fn selection(&self, id: &str) -> &[String] {
        self.get(id).map(|d| d.selection()).unwrap_or(&[])
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.get(id).map(|d| d.open).unwrap_or(false)
    }

    /// Overwrite the displayed selection with an externally owned value.
    /// This is how a controlled select's projection stays in sync.
    pub fn set_value(&mut self, id: &str, values: impl IntoIterator<Item = impl Into<String>>) {
        if let Some(entry) = self.selects.get_mut(id) {
            entry.data.selection = values.into_iter().map(Into::into).collect();
        }
    }

    /// The pointer-down observer registry backing outside-click detection.
    pub fn registry(&self) -> &PointerRegistry {
        &self.registry
    }

    /// Declare a select for this frame and build its element subtree.
    /// Unknown IDs mount with default (uncontrolled, single) state.
    pub fn view(&mut self, id: &str, options: &[SelectOption], config: &SelectConfig) -> Element {
        let styles = ensure_styles();
        let entry = self.entry_mut(id);
        entry.data.declared = options
            .iter()
            .map(|o| DeclaredOption {
                value: o.value.clone(),
                disabled: o.disabled,
            })
            .collect();
        build_select(id, &entry.data, options, config, styles)
    }

    /// Process events and handle select interaction.
    /// Returns emitted events (Change) plus events that passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Click { target, .. } => {
                    // Every subscribed select whose subtree does not contain
                    // the pointer-down closes. This runs before the targeted
                    // pass so a click on select A still closes select B.
                    for sid in self.registry.observers() {
                        let inside = target
                            .as_deref()
                            .map(|t| contains_element(root, &sid, t))
                            .unwrap_or(false);
                        if !inside && self.is_open(&sid) {
                            log::debug!("[select] outside click closes {sid}");
                            self.close(&sid);
                        }
                    }

                    match self.route_click(target.as_deref(), root) {
                        Some(Some(change)) => output.push(change),
                        Some(None) => {}
                        None => output.push(event.clone()),
                    }
                }

                Event::Key {
                    target: Some(target),
                    key,
                    ..
                } if self.selects.contains_key(target) => {
                    match self.handle_key(target, *key) {
                        KeyOutcome::Consumed => {}
                        KeyOutcome::Emitted(change) => output.push(change),
                        KeyOutcome::Ignored => output.push(event.clone()),
                    }
                }

                Event::Blur { target } if self.selects.contains_key(target) => {
                    // Focus left the widget.
                    self.close(target);
                    output.push(event.clone());
                }

                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Toggle an option as if it were clicked. No-op for disabled options.
    /// Multi mode removes a present value or appends an absent one (selection
    /// order); single mode replaces the set and closes. Uncontrolled selects
    /// commit the new set; either way the change event is returned.
    pub fn toggle_option(&mut self, id: &str, value: &str, disabled: bool) -> Option<Event> {
        if disabled {
            log::trace!("[select] {id}: ignoring toggle of disabled option {value}");
            return None;
        }

        let entry = self.selects.get_mut(id)?;
        let data = &mut entry.data;

        let mut next = data.selection.clone();
        if data.multiple {
            if let Some(pos) = next.iter().position(|v| v == value) {
                next.remove(pos);
            } else {
                next.push(value.to_string());
            }
        } else {
            next = vec![value.to_string()];
            data.open = false;
            data.highlight = None;
        }

        if !data.controlled {
            data.selection = next.clone();
        }

        let payload = if data.multiple {
            SelectValue::Multiple(next)
        } else {
            SelectValue::Single(value.to_string())
        };
        log::debug!("[select] {id}: toggled {value}, now {payload:?}");

        Some(Event::Change {
            target: id.to_string(),
            value: payload,
        })
    }

    /// Close a select and reset its highlight cursor.
    pub fn close(&mut self, id: &str) {
        if let Some(entry) = self.selects.get_mut(id) {
            entry.data.open = false;
            entry.data.highlight = None;
        }
    }

    /// Route a click to the select part it landed on, if any.
    /// `None`: not ours, pass the event through. `Some(None)`: consumed
    /// without a change. `Some(Some(event))`: consumed with a change.
    fn route_click(&mut self, target: Option<&str>, root: &Element) -> Option<Option<Event>> {
        let element = find_element(root, target?)?;
        let sid = element.get_data("select")?.clone();
        let part = element.get_data("part")?.clone();
        if !self.selects.contains_key(&sid) {
            return None;
        }

        match part.as_str() {
            "control" => {
                let entry = self.selects.get_mut(&sid)?;
                if entry.data.open {
                    entry.data.open = false;
                    entry.data.highlight = None;
                } else {
                    entry.data.open = true;
                }
                log::debug!("[select] {sid}: control click, open={}", entry.data.open);
                Some(None)
            }
            "option" => {
                let value = element.get_data("value")?.clone();
                Some(self.toggle_option(&sid, &value, element.disabled))
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, id: &str, key: Key) -> KeyOutcome {
        let Some(entry) = self.selects.get_mut(id) else {
            return KeyOutcome::Ignored;
        };
        let data = &mut entry.data;

        if !data.open {
            return match key {
                Key::Up | Key::Down => {
                    data.open = true;
                    // Cursor enters at the first option even if it is
                    // disabled; scanning only applies while already open.
                    data.highlight = Some(0);
                    log::debug!("[select] {id}: opened via arrow key");
                    KeyOutcome::Consumed
                }
                _ => KeyOutcome::Ignored,
            };
        }

        let (value, disabled) = match key {
            Key::Down => {
                data.highlight = scan_down(&data.declared, data.highlight);
                return KeyOutcome::Consumed;
            }
            Key::Up => {
                data.highlight = scan_up(&data.declared, data.highlight);
                return KeyOutcome::Consumed;
            }
            Key::Escape => {
                data.open = false;
                data.highlight = None;
                log::debug!("[select] {id}: closed via Escape");
                return KeyOutcome::Consumed;
            }
            Key::Enter => {
                let Some(index) = data.highlight else {
                    return KeyOutcome::Ignored;
                };
                match data.declared.get(index) {
                    Some(option) => (option.value.clone(), option.disabled),
                    // Options shrank since the last declaration.
                    None => return KeyOutcome::Consumed,
                }
            }
            _ => return KeyOutcome::Ignored,
        };

        match self.toggle_option(id, &value, disabled) {
            Some(change) => KeyOutcome::Emitted(change),
            None => KeyOutcome::Consumed,
        }
    }

    fn entry_mut(&mut self, id: &str) -> &mut Entry {
        let registry = &self.registry;
        self.selects.entry(id.to_string()).or_insert_with(|| {
            ensure_styles();
            log::debug!("[select] mount {id}");
            Entry {
                data: SelectData::new(),
                _subscription: registry.subscribe(id),
            }
        })
    }
}

/// Scan forward from the cursor for the next enabled option.
/// No wraparound; the cursor stays put when nothing is eligible.
fn scan_down(options: &[DeclaredOption], from: Option<usize>) -> Option<usize> {
    let mut next = from.map_or(0, |i| i + 1);
    while next < options.len() && options[next].disabled {
        next += 1;
    }
    if next < options.len() {
        Some(next)
    } else {
        from
    }
}

/// Scan backward from the cursor for the previous enabled option.
/// No wraparound; the cursor stays put when nothing is eligible.
fn scan_up(options: &[DeclaredOption], from: Option<usize>) -> Option<usize> {
    let Some(current) = from else {
        return from;
    };
    let mut prev = current.checked_sub(1);
    while let Some(p) = prev {
        if options.get(p).map(|o| o.disabled).unwrap_or(false) {
            prev = p.checked_sub(1);
        } else {
            break;
        }
    }
    match prev {
        Some(p) => Some(p),
        None => from,
    }
}
