//! Visible key-hint badges.

use crate::key::Key;
use ratatui::style::Style;
use ratatui::text::Span;
use serde::{Deserialize, Serialize};

/// Where hint badges are placed relative to the bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintPlacement {
    /// Before the element's own content.
    BeforeContent,
    /// Inside the element's first associated label (text inputs).
    InLabel,
}

/// The hint badges for one binding: one badge per key, chained in sequence
/// order. Built at attach time when hint generation is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hints {
    keys: Vec<Key>,
    placement: HintPlacement,
}

impl Hints {
    pub(crate) fn new(keys: Vec<Key>, placement: HintPlacement) -> Self {
        Self { keys, placement }
    }

    pub fn placement(&self) -> HintPlacement {
        self.placement
    }

    /// The keys the badges describe, in sequence order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// One label per badge, in sequence order.
    pub fn badges(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.to_string()).collect()
    }

    /// Render the badges as a text prefix: `"[g][t] Go to top"`.
    pub fn decorate(&self, text: &str) -> String {
        let mut out = String::new();
        for key in &self.keys {
            out.push('[');
            out.push_str(&key.to_string());
            out.push(']');
        }
        if !out.is_empty() && !text.is_empty() {
            out.push(' ');
        }
        out.push_str(text);
        out
    }

    /// Render the badges as styled ratatui spans, one per key.
    pub fn spans(&self, badge_style: Style) -> Vec<Span<'static>> {
        self.keys
            .iter()
            .map(|key| Span::styled(format!("[{}]", key), badge_style))
            .collect()
    }
}
