//! Shortcut registry: binding lifecycle and key ingestion.

use crate::binding::{Binding, ElementId, ShortcutConfig, Trigger};
use crate::defaults::{Defaults, DefaultsUpdate};
use crate::element::Element;
use crate::hints::Hints;
use crate::history::KeyHistory;
use crate::key::Key;
use crate::matcher;

use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What a key press triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triggered {
    /// Focus moved to the element.
    Focus(ElementId),
    /// The element should be activated, as if clicked. The registry cannot
    /// perform the activation itself; the host event loop applies it.
    Click(ElementId),
    /// The element's callback ran.
    Callback(ElementId),
}

impl Triggered {
    /// The element whose binding fired.
    pub fn element(&self) -> ElementId {
        match self {
            Self::Focus(id) | Self::Click(id) | Self::Callback(id) => *id,
        }
    }
}

/// Owns the shared key history and every attached binding.
///
/// All appends, match evaluations, and trigger invocations run synchronously on
/// the host's event-loop thread; there is no locking and no suspension point.
pub struct ShortcutRegistry {
    defaults: Defaults,
    history: KeyHistory,
    bindings: Vec<Binding>,
    focused: Option<ElementId>,
    last_key_time: Option<Instant>,
    next_id: u64,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutRegistry {
    /// Create a registry with the built-in defaults.
    pub fn new() -> Self {
        Self::with_defaults(Defaults::default())
    }

    /// Create a registry with explicit defaults.
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            defaults,
            history: KeyHistory::new(),
            bindings: Vec::new(),
            focused: None,
            last_key_time: None,
            next_id: 0,
        }
    }

    /// The current defaults.
    pub fn defaults(&self) -> Defaults {
        self.defaults
    }

    /// Merge a partial update onto the defaults and return the result.
    ///
    /// Defaults are read at attach time only; bindings that already exist keep
    /// the options they resolved with.
    pub fn set_defaults(&mut self, update: DefaultsUpdate) -> Defaults {
        self.defaults.apply(update);
        self.defaults
    }

    /// Attach a shortcut to an element.
    ///
    /// Resolves the trigger and key sequence, builds hint badges when enabled,
    /// and registers the binding as a watcher of the shared history. A binding
    /// whose resolved sequence is empty is kept but never fires.
    pub fn attach(&mut self, element: Element, config: ShortcutConfig) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;

        let binding = Binding::resolve(id, element, config, &self.defaults);
        if binding.keys().is_empty() {
            warn!(
                element = %id,
                kind = ?binding.element().kind(),
                "no shortcut key resolved; binding will never fire"
            );
        }
        debug!(
            element = %id,
            kind = ?binding.element().kind(),
            keys = %format_keys(binding.keys()),
            "shortcut attached"
        );

        self.bindings.push(binding);
        id
    }

    /// Detach a binding when its element is removed from the UI. Returns
    /// whether a binding was removed; no further invocations occur for it.
    pub fn detach(&mut self, id: ElementId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id() != id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.bindings.len() != before
    }

    /// Feed a raw key event.
    ///
    /// Release events and keys outside the recognized set are ignored.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Triggered> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = Key::from_event(event)?;
        self.press(key)
    }

    /// Record a recognized key press and evaluate every binding.
    ///
    /// Bindings are evaluated in attach order; the first whose sequence matches
    /// the history tail fires, and the shared history is reset immediately, so
    /// at most one binding fires per press and other bindings lose any partial
    /// progress. If the gap since the previous press exceeds the configured
    /// timeout, the history is cleared first (the partial sequence expired).
    pub fn press(&mut self, key: Key) -> Option<Triggered> {
        let now = Instant::now();
        if let Some(last) = self.last_key_time {
            let timeout_ms = self.defaults.timeout_ms;
            if timeout_ms > 0 && now.duration_since(last) > Duration::from_millis(timeout_ms) {
                self.history.reset();
            }
        }
        self.last_key_time = Some(now);
        self.history.append(key);

        for binding in &mut self.bindings {
            if !matcher::matches(self.history.keys(), binding.keys()) {
                continue;
            }

            let id = binding.id();
            let fired = match &mut binding.trigger {
                Trigger::Callback(f) => {
                    f();
                    Some(Triggered::Callback(id))
                }
                Trigger::Focus => Some(Triggered::Focus(id)),
                Trigger::Click => Some(Triggered::Click(id)),
                Trigger::Noop => None,
            };

            self.history.reset();
            if let Some(Triggered::Focus(id)) = fired {
                self.focused = Some(id);
            }
            return fired;
        }

        None
    }

    /// The element last focused through a shortcut.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// The shared key history.
    pub fn history(&self) -> &KeyHistory {
        &self.history
    }

    /// Look up a binding.
    pub fn binding(&self, id: ElementId) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.id() == id)
    }

    /// The hint badges for a binding, if it renders any.
    pub fn hints(&self, id: ElementId) -> Option<&Hints> {
        self.binding(id).and_then(|b| b.hints())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn format_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
