//! Binding configuration and resolution.

use crate::defaults::Defaults;
use crate::element::{infer_keys, Element};
use crate::hints::{HintPlacement, Hints};
use crate::key::Key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a bound element, issued by the registry at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a shortcut triggers its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    /// Resolve from the element: activatable elements click, elements with a
    /// callback run it, everything else takes focus.
    #[default]
    Auto,
    /// Run the supplied callback.
    Callback,
    /// Simulate activating the element.
    Click,
    /// Move focus to the element.
    Focus,
}

/// Per-binding options; `None` fields fall back to the registry defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Options {
    /// Whether to render hint badges for this binding.
    #[serde(default)]
    pub generate_kbd: Option<bool>,
}

/// Configuration for attaching a shortcut to an element.
///
/// Everything is optional: with no explicit keys the sequence is inferred from
/// the element's text, and with the default [`TriggerKind::Auto`] the trigger is
/// resolved from the element's kind.
#[derive(Default)]
pub struct ShortcutConfig {
    pub(crate) trigger: TriggerKind,
    pub(crate) keys: Vec<Key>,
    pub(crate) callback: Option<Box<dyn FnMut()>>,
    pub(crate) options: Options,
}

impl ShortcutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trigger kind.
    pub fn trigger(mut self, trigger: TriggerKind) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set an explicit key sequence, skipping inference.
    pub fn keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys = keys.into_iter().collect();
        self
    }

    /// Set the callback invoked for [`TriggerKind::Callback`] bindings.
    pub fn callback(mut self, f: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }

    /// Override hint-badge generation for this binding.
    pub fn generate_kbd(mut self, on: bool) -> Self {
        self.options.generate_kbd = Some(on);
        self
    }

    /// Replace the per-binding options wholesale.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// The resolved trigger action. A missing callback on an explicit
/// [`TriggerKind::Callback`] binding resolves to a silent no-op.
pub(crate) enum Trigger {
    Callback(Box<dyn FnMut()>),
    Focus,
    Click,
    Noop,
}

fn resolve_trigger(
    kind: TriggerKind,
    element: &Element,
    callback: Option<Box<dyn FnMut()>>,
) -> Trigger {
    match kind {
        TriggerKind::Click => Trigger::Click,
        TriggerKind::Focus => Trigger::Focus,
        TriggerKind::Callback => match callback {
            Some(f) => Trigger::Callback(f),
            None => Trigger::Noop,
        },
        TriggerKind::Auto => {
            if element.kind().is_activatable() {
                Trigger::Click
            } else if let Some(f) = callback {
                Trigger::Callback(f)
            } else {
                Trigger::Focus
            }
        }
    }
}

/// One attached shortcut: the element, its resolved key sequence and trigger,
/// and the hint badges if generation was enabled.
pub struct Binding {
    id: ElementId,
    element: Element,
    keys: Vec<Key>,
    pub(crate) trigger: Trigger,
    hints: Option<Hints>,
}

impl Binding {
    /// Resolve a configuration against an element and the registry defaults.
    pub(crate) fn resolve(id: ElementId, element: Element, config: ShortcutConfig, defaults: &Defaults) -> Self {
        let ShortcutConfig {
            trigger,
            keys,
            callback,
            options,
        } = config;

        let keys = if keys.is_empty() {
            infer_keys(&element)
        } else {
            keys
        };

        let trigger = resolve_trigger(trigger, &element, callback);

        let hints = options
            .generate_kbd
            .unwrap_or(defaults.generate_kbd)
            .then(|| {
                let placement = if element.kind().is_text_input() {
                    HintPlacement::InLabel
                } else {
                    HintPlacement::BeforeContent
                };
                Hints::new(keys.clone(), placement)
            });

        Self {
            id,
            element,
            keys,
            trigger,
            hints,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The resolved key sequence. Empty means the binding never fires.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// The hint badges, if generation was enabled for this binding.
    pub fn hints(&self) -> Option<&Hints> {
        self.hints.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(element: Element, config: ShortcutConfig) -> Binding {
        Binding::resolve(ElementId::new(0), element, config, &Defaults::default())
    }

    #[test]
    fn test_auto_resolves_click_for_activatable() {
        let binding = resolve(Element::button("Save"), ShortcutConfig::new());
        assert!(matches!(binding.trigger, Trigger::Click));

        let binding = resolve(Element::link("Home"), ShortcutConfig::new());
        assert!(matches!(binding.trigger, Trigger::Click));
    }

    #[test]
    fn test_auto_resolves_callback_when_supplied() {
        let binding = resolve(
            Element::new(crate::ElementKind::Other, "Refresh"),
            ShortcutConfig::new().callback(|| {}),
        );
        assert!(matches!(binding.trigger, Trigger::Callback(_)));
    }

    #[test]
    fn test_auto_falls_back_to_focus() {
        let binding = resolve(
            Element::text_input().with_input_label("Name"),
            ShortcutConfig::new(),
        );
        assert!(matches!(binding.trigger, Trigger::Focus));
    }

    #[test]
    fn test_explicit_kind_wins_over_element_shape() {
        let binding = resolve(
            Element::button("Save"),
            ShortcutConfig::new().trigger(TriggerKind::Focus),
        );
        assert!(matches!(binding.trigger, Trigger::Focus));
    }

    #[test]
    fn test_callback_kind_without_callback_is_noop() {
        let binding = resolve(
            Element::button("Save"),
            ShortcutConfig::new().trigger(TriggerKind::Callback),
        );
        assert!(matches!(binding.trigger, Trigger::Noop));
    }

    #[test]
    fn test_explicit_keys_skip_inference() {
        let binding = resolve(
            Element::button("Save"),
            ShortcutConfig::new().keys([Key::Char('x'), Key::Char('y')]),
        );
        assert_eq!(binding.keys(), &[Key::Char('x'), Key::Char('y')]);
    }

    #[test]
    fn test_empty_keys_are_inferred() {
        let binding = resolve(Element::button("Save"), ShortcutConfig::new());
        assert_eq!(binding.keys(), &[Key::Char('s')]);
    }

    #[test]
    fn test_hint_placement_follows_element_kind() {
        let binding = resolve(Element::button("Save"), ShortcutConfig::new());
        assert_eq!(
            binding.hints().map(|h| h.placement()),
            Some(HintPlacement::BeforeContent)
        );

        let binding = resolve(
            Element::text_input().with_input_label("Name"),
            ShortcutConfig::new(),
        );
        assert_eq!(
            binding.hints().map(|h| h.placement()),
            Some(HintPlacement::InLabel)
        );
    }

    #[test]
    fn test_binding_option_overrides_defaults() {
        let defaults = Defaults {
            generate_kbd: false,
            ..Defaults::default()
        };
        let binding = Binding::resolve(
            ElementId::new(0),
            Element::button("Save"),
            ShortcutConfig::new().generate_kbd(true),
            &defaults,
        );
        assert!(binding.hints().is_some());
    }
}
