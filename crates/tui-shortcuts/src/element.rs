//! Element classification and key inference.

use crate::key::Key;
use serde::{Deserialize, Serialize};

/// What kind of UI element a shortcut is attached to.
///
/// Classification is a decision table over a small capability set, not
/// duck-typing: activatable elements receive a simulated click, text-input-like
/// elements carry their hint inside the associated label, everything else takes
/// focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A push button.
    Button,
    /// A navigation link.
    Link,
    /// A text-entry control with an associated label.
    TextInput,
    /// Anything else (panes, list rows, plain text).
    #[default]
    Other,
}

impl ElementKind {
    /// Whether activating the element (a click) is its natural trigger.
    pub fn is_activatable(&self) -> bool {
        matches!(self, Self::Button | Self::Link)
    }

    /// Whether the element is a text-input-like control.
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::TextInput)
    }
}

/// Description of a bound element: its kind, its own text content, and the text
/// of its first associated label (meaningful for text inputs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    label: String,
    input_label: Option<String>,
}

impl Element {
    /// Create an element of the given kind with its own text content.
    pub fn new(kind: ElementKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            input_label: None,
        }
    }

    /// A button with the given text.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Button, label)
    }

    /// A link with the given text.
    pub fn link(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Link, label)
    }

    /// A text input. Inputs have no text content of their own; attach the
    /// associated label with [`Element::with_input_label`].
    pub fn text_input() -> Self {
        Self::new(ElementKind::TextInput, "")
    }

    /// Set the text of the first associated label.
    pub fn with_input_label(mut self, label: impl Into<String>) -> Self {
        self.input_label = Some(label.into());
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The element's own text content.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The text of the first associated label, if any.
    pub fn input_label(&self) -> Option<&str> {
        self.input_label.as_deref()
    }
}

/// Infer a key sequence from an element's text.
///
/// Takes the element's own text content, or the first associated label for a
/// text-input-like control. If the first character is an ASCII letter or digit
/// it becomes a single-key sequence (lowercased); otherwise the result is empty
/// and the binding stays inert.
pub fn infer_keys(element: &Element) -> Vec<Key> {
    let text = if element.kind().is_text_input() {
        element.input_label().unwrap_or("")
    } else {
        element.label()
    };

    match text.chars().next().and_then(Key::from_char) {
        Some(key) => vec![key],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        assert!(ElementKind::Button.is_activatable());
        assert!(ElementKind::Link.is_activatable());
        assert!(!ElementKind::TextInput.is_activatable());
        assert!(!ElementKind::Other.is_activatable());
        assert!(ElementKind::TextInput.is_text_input());
    }

    #[test]
    fn test_infer_from_text_content() {
        let element = Element::button("Save");
        assert_eq!(infer_keys(&element), vec![Key::Char('s')]);
    }

    #[test]
    fn test_infer_from_input_label() {
        let element = Element::text_input().with_input_label("Name");
        assert_eq!(infer_keys(&element), vec![Key::Char('n')]);
    }

    #[test]
    fn test_infer_ignores_own_label_for_inputs() {
        // An input without an associated label has nothing to infer from.
        let element = Element::text_input();
        assert!(infer_keys(&element).is_empty());
    }

    #[test]
    fn test_infer_requires_alphanumeric_first_char() {
        assert!(infer_keys(&Element::link("→ Next")).is_empty());
        assert!(infer_keys(&Element::button("")).is_empty());
        assert_eq!(
            infer_keys(&Element::button("2nd page")),
            vec![Key::Char('2')]
        );
    }
}
