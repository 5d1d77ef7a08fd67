use std::collections::HashMap;

use crate::element::Element;

/// Typed description of one choice in a select: the identity token, the
/// disabled flag, renderable content, and pass-through attributes emitted
/// on the option's element. The host passes an ordered slice of these to
/// the container on every declaration; the container never mutates them.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub disabled: bool,
    pub content: Element,
    pub attrs: HashMap<String, String>,
}

impl SelectOption {
    /// Create an option whose content defaults to its value token.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            content: Element::text(value.clone()),
            disabled: false,
            attrs: HashMap::new(),
            value,
        }
    }

    /// Replace the content with plain text.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.content = Element::text(text);
        self
    }

    /// Replace the content with an arbitrary element subtree.
    pub fn content(mut self, content: Element) -> Self {
        self.content = content;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Add a pass-through data attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}
