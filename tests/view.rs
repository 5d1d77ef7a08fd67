use seldom::{
    control_id, ensure_styles, install_count, menu_id, option_id, Content, Element, SelectConfig,
    SelectData, SelectOption, SelectState,
};

fn children(element: &Element) -> &[Element] {
    match &element.content {
        Content::Children(children) => children,
        _ => &[],
    }
}

fn text_of(element: &Element) -> &str {
    match &element.content {
        Content::Text(text) => text,
        _ => "",
    }
}

fn find<'a>(root: &'a Element, id: &str) -> &'a Element {
    seldom::find_element(root, id).unwrap_or_else(|| panic!("missing element {id}"))
}

fn view(data: SelectData, options: &[SelectOption], config: &SelectConfig) -> Element {
    let mut state = SelectState::new();
    state.insert("sel", data);
    state.view("sel", options, config)
}

// ============================================================================
// Control surface
// ============================================================================

#[test]
fn empty_selection_shows_placeholder() {
    let options = vec![SelectOption::new("A")];
    let root = view(
        SelectData::new(),
        &options,
        &SelectConfig::new().placeholder("Pick one"),
    );

    let control = find(&root, &control_id("sel"));
    assert_eq!(text_of(&children(control)[0]), "Pick one");
}

#[test]
fn label_joins_selection_in_selection_order() {
    let options = vec![SelectOption::new("A"), SelectOption::new("B")];
    let root = view(
        SelectData::new().multiple().with_selection(["B", "A"]),
        &options,
        &SelectConfig::new(),
    );

    let control = find(&root, &control_id("sel"));
    assert_eq!(text_of(&children(control)[0]), "B, A");
}

#[test]
fn label_keeps_stale_tokens_verbatim() {
    // "Z" matches no declared option; the raw token still shows.
    let options = vec![SelectOption::new("A")];
    let root = view(
        SelectData::new().with_selection(["Z"]),
        &options,
        &SelectConfig::new(),
    );

    let control = find(&root, &control_id("sel"));
    assert_eq!(text_of(&children(control)[0]), "Z");
}

#[test]
fn arrow_marker_follows_open_state() {
    let options = vec![SelectOption::new("A")];

    let closed = view(SelectData::new(), &options, &SelectConfig::new());
    let control = find(&closed, &control_id("sel"));
    assert_eq!(text_of(&children(control)[1]), "▼");

    let mut open = SelectData::new();
    open.open = true;
    let opened = view(open, &options, &SelectConfig::new());
    let control = find(&opened, &control_id("sel"));
    assert_eq!(text_of(&children(control)[1]), "▲");
}

#[test]
fn custom_arrow_markers_replace_defaults() {
    let options = vec![SelectOption::new("A")];
    let root = view(
        SelectData::new(),
        &options,
        &SelectConfig::new().arrow_closed(Element::text(">")),
    );

    let control = find(&root, &control_id("sel"));
    assert_eq!(text_of(&children(control)[1]), ">");
}

#[test]
fn container_carries_role_and_config_attrs() {
    let options = vec![SelectOption::new("A")];
    let root = view(
        SelectData::new(),
        &options,
        &SelectConfig::new().attr("data-testid", "fruit-picker"),
    );

    assert!(root.focusable);
    assert_eq!(root.get_data("role").map(String::as_str), Some("select"));
    assert_eq!(
        root.get_data("data-testid").map(String::as_str),
        Some("fruit-picker")
    );
}

// ============================================================================
// Menu structure
// ============================================================================

#[test]
fn menu_only_exists_while_open() {
    let options = vec![SelectOption::new("A")];

    let closed = view(SelectData::new(), &options, &SelectConfig::new());
    assert!(seldom::find_element(&closed, &menu_id("sel")).is_none());

    let mut data = SelectData::new();
    data.open = true;
    let opened = view(data, &options, &SelectConfig::new());
    assert!(seldom::find_element(&opened, &menu_id("sel")).is_some());
}

#[test]
fn options_render_in_declaration_order_with_metadata() {
    let options = vec![
        SelectOption::new("apple").label("Apple"),
        SelectOption::new("banana").disabled(true),
        SelectOption::new("cherry").attr("data-origin", "orchard"),
    ];
    let mut data = SelectData::new();
    data.open = true;
    let root = view(data, &options, &SelectConfig::new());

    let menu = find(&root, &menu_id("sel"));
    let rows = children(menu);
    assert_eq!(rows.len(), 3);

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.id, option_id("sel", index));
        assert!(row.clickable);
        assert_eq!(row.get_data("part").map(String::as_str), Some("option"));
    }

    assert_eq!(rows[0].get_data("value").map(String::as_str), Some("apple"));
    assert_eq!(text_of(&children(&rows[0])[0]), "Apple");

    assert!(rows[1].disabled);
    assert_eq!(
        rows[1].get_data("aria-disabled").map(String::as_str),
        Some("true")
    );
    assert!(rows[0].get_data("aria-disabled").is_none());

    assert_eq!(
        rows[2].get_data("data-origin").map(String::as_str),
        Some("orchard")
    );
}

#[test]
fn multi_mode_prefixes_selection_markers() {
    let options = vec![SelectOption::new("A"), SelectOption::new("B")];
    let mut data = SelectData::new().multiple().with_selection(["B"]);
    data.open = true;
    let root = view(data, &options, &SelectConfig::new());

    let menu = find(&root, &menu_id("sel"));
    let rows = children(menu);
    assert_eq!(text_of(&children(&rows[0])[0]), "[ ]");
    assert_eq!(text_of(&children(&rows[1])[0]), "[x]");
}

#[test]
fn menu_width_covers_longest_option() {
    let options = vec![
        SelectOption::new("A"),
        SelectOption::new("Pomegranate"),
    ];
    let mut data = SelectData::new();
    data.open = true;
    let root = view(data, &options, &SelectConfig::new());
    let menu = find(&root, &menu_id("sel"));
    assert_eq!(menu.min_width, Some(11));

    // Multi mode reserves marker space on top.
    let mut data = SelectData::new().multiple();
    data.open = true;
    let root = view(data, &options, &SelectConfig::new());
    let menu = find(&root, &menu_id("sel"));
    assert_eq!(menu.min_width, Some(15));
}

// ============================================================================
// Styling
// ============================================================================

#[test]
fn state_styles_compose_over_the_base_option_style() {
    let styles = ensure_styles();
    let options = vec![
        SelectOption::new("A"),
        SelectOption::new("B").disabled(true),
    ];
    let mut data = SelectData::new().with_selection(["B"]);
    data.open = true;
    data.highlight = Some(1);
    let root = view(data, &options, &SelectConfig::new());

    let menu = find(&root, &menu_id("sel"));
    let rows = children(menu);

    assert_eq!(rows[0].style, styles.option);
    // Selected + disabled + highlighted all at once, merged in that order.
    let expected = styles
        .option
        .merge(&styles.selected)
        .merge(&styles.disabled)
        .merge(&styles.highlight);
    assert_eq!(rows[1].style, expected);
}

#[test]
fn control_and_menu_take_stylesheet_styles() {
    let styles = ensure_styles();
    let options = vec![SelectOption::new("A")];
    let mut data = SelectData::new();
    data.open = true;
    let root = view(data, &options, &SelectConfig::new());

    assert_eq!(find(&root, &control_id("sel")).style, styles.control);
    assert_eq!(find(&root, &menu_id("sel")).style, styles.menu);
}

#[test]
fn stylesheet_installs_once_across_mounts() {
    let mut state = SelectState::new();
    state.insert("one", SelectData::new());
    state.insert("two", SelectData::new());
    let mut other = SelectState::new();
    other.insert("three", SelectData::new());

    assert_eq!(install_count(), 1);
}
