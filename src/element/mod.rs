mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Check whether `id` is the element `ancestor_id` or one of its descendants.
/// An element contains itself. Used for outside-click detection.
pub fn contains_element(root: &Element, ancestor_id: &str, id: &str) -> bool {
    find_element(root, ancestor_id)
        .map(|ancestor| find_element(ancestor, id).is_some())
        .unwrap_or(false)
}
