//! # tui-shortcuts
//!
//! Declarative keyboard shortcuts with on-screen hint badges for TUI elements.
//!
//! ## Features
//!
//! - Single-key and ordered multi-key sequences (`g` then `t`)
//! - Trigger resolution from the element itself (click, focus, or callback)
//! - Key inference from an element's text or associated label
//! - Generated hint badges, renderable as plain text or ratatui spans
//! - Partial-sequence expiry after a configurable inactivity timeout
//!
//! A [`ShortcutRegistry`] owns the shared key history and every attached
//! binding. The host event loop feeds it crossterm key events; on a match the
//! registry runs the binding's callback or reports the focus/click effect for
//! the host to apply.

mod binding;
mod defaults;
mod element;
mod hints;
mod history;
mod key;
mod matcher;
mod parser;
mod registry;

pub use binding::{Binding, ElementId, Options, ShortcutConfig, TriggerKind};
pub use defaults::{Defaults, DefaultsUpdate};
pub use element::{infer_keys, Element, ElementKind};
pub use hints::{HintPlacement, Hints};
pub use history::KeyHistory;
pub use key::Key;
pub use matcher::matches;
pub use parser::{parse_key, parse_sequence, ParseError};
pub use registry::{ShortcutRegistry, Triggered};

/// Helper to build a key sequence from a string of letters and digits.
///
/// Characters outside the letter/digit set are skipped, so `chars("gt")` is
/// `[g, t]`.
pub fn chars(s: &str) -> Vec<Key> {
    s.chars().filter_map(Key::from_char).collect()
}
