//! Application state and shortcut wiring.

use crate::config::DemoConfig;
use crossterm::event::KeyEvent;
use std::cell::Cell;
use std::rc::Rc;
use tui_shortcuts::{
    chars, Element, ElementId, ElementKind, ShortcutConfig, ShortcutRegistry, Triggered,
    TriggerKind,
};

/// Application state.
pub struct App {
    /// Shortcut registry fed by the event loop.
    pub registry: ShortcutRegistry,
    /// Bound elements in display order.
    pub elements: Vec<ElementId>,
    /// Element last activated by a click shortcut.
    pub activated: Option<ElementId>,
    /// Times the refresh callback ran.
    pub refresh_count: Rc<Cell<u32>>,
    /// Status line.
    pub status: String,
}

impl App {
    /// Create new application.
    pub fn new() -> Self {
        let config = DemoConfig::load();
        let mut registry = ShortcutRegistry::with_defaults(config.shortcuts);

        // A button resolves to a click on its first letter.
        let save = registry.attach(Element::button("Save"), ShortcutConfig::new());

        // A link with an explicit two-key sequence.
        let top = registry.attach(
            Element::link("Top of page"),
            ShortcutConfig::new().keys(chars("gt")),
        );

        // A labelled input takes focus on its label's first letter.
        let name = registry.attach(
            Element::text_input().with_input_label("Name"),
            ShortcutConfig::new(),
        );

        // A callback binding bumps a counter.
        let refresh_count = Rc::new(Cell::new(0));
        let counter = refresh_count.clone();
        let refresh = registry.attach(
            Element::new(ElementKind::Other, "Refresh feed"),
            ShortcutConfig::new()
                .trigger(TriggerKind::Callback)
                .callback(move || counter.set(counter.get() + 1)),
        );

        Self {
            registry,
            elements: vec![save, top, name, refresh],
            activated: None,
            refresh_count,
            status: "press a hinted key (q quits)".to_string(),
        }
    }

    /// Feed a key event and apply whatever it triggered.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        let Some(triggered) = self.registry.handle_key(event) else {
            return;
        };

        let label = self.label_of(triggered.element());
        match triggered {
            Triggered::Click(id) => {
                self.activated = Some(id);
                self.status = format!("activated \"{}\"", label);
            }
            Triggered::Focus(_) => {
                self.activated = None;
                self.status = format!("focused \"{}\"", label);
            }
            Triggered::Callback(_) => {
                self.status = format!("ran callback for \"{}\"", label);
            }
        }
    }

    /// Display label for an element: its own text, or its associated label.
    pub fn label_of(&self, id: ElementId) -> String {
        self.registry
            .binding(id)
            .map(|b| {
                let element = b.element();
                if element.label().is_empty() {
                    element.input_label().unwrap_or("").to_string()
                } else {
                    element.label().to_string()
                }
            })
            .unwrap_or_default()
    }
}
