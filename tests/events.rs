use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};

use seldom::{
    collect_focusable, contains_element, hit_test, hit_test_focusable, Element, Event, FocusState,
    Key, LayoutResult, MouseButton, Rect,
};

fn create_layout(rects: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in rects {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn two_button_ui() -> (Element, LayoutResult) {
    let root = Element::col()
        .id("root")
        .child(Element::text("ok").id("ok").clickable(true).focusable(true))
        .child(
            Element::text("cancel")
                .id("cancel")
                .clickable(true)
                .focusable(true),
        );
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 2)),
        ("ok", Rect::new(0, 0, 20, 1)),
        ("cancel", Rect::new(0, 1, 20, 1)),
    ]);
    (root, layout)
}

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse_down(column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn hit_test_finds_deepest_clickable() {
    let root = Element::col().id("root").clickable(true).child(
        Element::col()
            .id("inner")
            .clickable(true)
            .child(Element::text("leaf").id("leaf")),
    );
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("inner", Rect::new(2, 2, 5, 5)),
        ("leaf", Rect::new(3, 3, 2, 1)),
    ]);

    // Leaf is not clickable; the deepest clickable ancestor wins.
    assert_eq!(hit_test(&layout, &root, 3, 3), Some("inner".to_string()));
    // Outside inner but still on root.
    assert_eq!(hit_test(&layout, &root, 9, 9), Some("root".to_string()));
    // Outside everything.
    assert_eq!(hit_test(&layout, &root, 15, 15), None);
}

#[test]
fn hit_test_prefers_later_siblings() {
    // Overlapping rects: the last declared child paints on top.
    let root = Element::col()
        .id("root")
        .child(Element::text("under").id("under").clickable(true))
        .child(Element::text("over").id("over").clickable(true));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("under", Rect::new(0, 0, 10, 10)),
        ("over", Rect::new(2, 2, 4, 4)),
    ]);

    assert_eq!(hit_test(&layout, &root, 3, 3), Some("over".to_string()));
    assert_eq!(hit_test(&layout, &root, 0, 0), Some("under".to_string()));
}

#[test]
fn hit_test_focusable_ignores_plain_clickables() {
    let (root, layout) = two_button_ui();
    assert_eq!(
        hit_test_focusable(&layout, &root, 5, 1),
        Some("cancel".to_string())
    );

    let unfocusable = Element::col()
        .id("root")
        .child(Element::text("ok").id("ok").clickable(true));
    assert_eq!(hit_test_focusable(&layout, &unfocusable, 5, 0), None);
}

#[test]
fn containment_includes_the_ancestor_itself() {
    let (root, _) = two_button_ui();
    assert!(contains_element(&root, "root", "ok"));
    assert!(contains_element(&root, "root", "root"));
    assert!(!contains_element(&root, "ok", "cancel"));
}

// ============================================================================
// Focus management
// ============================================================================

#[test]
fn tab_cycles_focus_in_tree_order() {
    let (root, _) = two_button_ui();
    let mut focus = FocusState::new();

    assert_eq!(collect_focusable(&root), ["ok", "cancel"]);

    assert_eq!(focus.focus_next(&root), Some("ok".to_string()));
    assert_eq!(focus.focus_next(&root), Some("cancel".to_string()));
    // Wraps back to the first.
    assert_eq!(focus.focus_next(&root), Some("ok".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("cancel".to_string()));
}

#[test]
fn explicit_focus_and_blur() {
    let mut focus = FocusState::new();
    assert!(focus.focus("ok"));
    assert!(!focus.focus("ok"));
    assert_eq!(focus.focused(), Some("ok"));
    assert!(focus.blur());
    assert!(!focus.blur());
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Raw event conversion
// ============================================================================

#[test]
fn tab_emits_blur_then_focus_and_keys_target_the_focused_element() {
    let (root, layout) = two_button_ui();
    let mut focus = FocusState::new();

    let out = focus.process_events(&[press(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        out,
        vec![Event::Focus {
            target: "ok".to_string()
        }]
    );

    let out = focus.process_events(&[press(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        out,
        vec![
            Event::Blur {
                target: "ok".to_string()
            },
            Event::Focus {
                target: "cancel".to_string()
            },
        ]
    );

    let out = focus.process_events(&[press(KeyCode::Down)], &root, &layout);
    match &out[..] {
        [Event::Key { target, key, .. }] => {
            assert_eq!(target.as_deref(), Some("cancel"));
            assert_eq!(*key, Key::Down);
        }
        other => panic!("unexpected events: {other:?}"),
    }
}

#[test]
fn escape_is_delivered_to_the_focused_element() {
    let (root, layout) = two_button_ui();
    let mut focus = FocusState::new();
    focus.focus("ok");

    let out = focus.process_events(&[press(KeyCode::Esc)], &root, &layout);
    assert_eq!(
        out,
        vec![Event::Key {
            target: Some("ok".to_string()),
            key: Key::Escape,
            modifiers: seldom::Modifiers::new(),
        }]
    );
}

#[test]
fn mouse_down_focuses_the_hit_element_and_emits_a_click() {
    let (root, layout) = two_button_ui();
    let mut focus = FocusState::new();

    let out = focus.process_events(&[mouse_down(5, 1)], &root, &layout);
    assert_eq!(
        out,
        vec![
            Event::Focus {
                target: "cancel".to_string()
            },
            Event::Click {
                target: Some("cancel".to_string()),
                x: 5,
                y: 1,
                button: MouseButton::Left,
            },
        ]
    );
    assert_eq!(focus.focused(), Some("cancel"));

    // A click outside every focusable blurs and carries no target.
    let out = focus.process_events(&[mouse_down(50, 50)], &root, &layout);
    assert_eq!(
        out,
        vec![
            Event::Blur {
                target: "cancel".to_string()
            },
            Event::Click {
                target: None,
                x: 50,
                y: 50,
                button: MouseButton::Left,
            },
        ]
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn resize_passes_through() {
    let (root, layout) = two_button_ui();
    let mut focus = FocusState::new();

    let out = focus.process_events(&[CrosstermEvent::Resize(80, 24)], &root, &layout);
    assert_eq!(
        out,
        vec![Event::Resize {
            width: 80,
            height: 24
        }]
    );
}
