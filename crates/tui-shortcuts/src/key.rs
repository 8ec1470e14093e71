//! Key identifier types.

use crossterm::event::{KeyCode, KeyEvent, ModifierKeyCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical name of a single pressed key.
///
/// The set is closed: letters and digits (always lowercase ASCII inside
/// [`Key::Char`]), modifier names, whitespace, navigation, function, numeric-pad,
/// and editing keys. Keys are immutable and compared by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A lowercase ASCII letter or digit. Use [`Key::from_char`] to construct.
    Char(char),

    // Modifiers
    Alt,
    AltGraph,
    CapsLock,
    Control,
    Fn,
    FnLock,
    Hyper,
    Meta,
    NumLock,
    ScrollLock,
    Shift,
    Super,
    Symbol,
    SymbolLock,

    // Whitespace
    Enter,
    Tab,
    Space,

    // Navigation
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    End,
    Home,
    PageDown,
    PageUp,

    /// Function key F1 through F20.
    F(u8),
    Soft1,
    Soft2,
    Soft3,
    Soft4,

    // Numeric keypad
    Decimal,
    Key11,
    Key12,
    Multiply,
    Add,
    Clear,
    Divide,
    Subtract,
    Separator,

    // Editing
    Backspace,
    Copy,
    CrSel,
    Cut,
    Delete,
    EraseEof,
    ExSel,
    Insert,
    Paste,
    Redo,
    Undo,
}

impl Key {
    /// Normalize a character into a key identifier.
    ///
    /// Returns `None` for anything outside the ASCII letter/digit set; uppercase
    /// letters are lowered so `'S'` and `'s'` name the same key.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphanumeric() {
            Some(Self::Char(c.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Map a crossterm key event to a key identifier.
    ///
    /// Only the subset of the enumeration that a terminal can actually deliver is
    /// reachable here; events outside it (Esc, media keys, non-ASCII characters)
    /// yield `None` and are ignored by callers.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Char(' ') => Some(Self::Space),
            KeyCode::Char(c) => Self::from_char(c),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Tab | KeyCode::BackTab => Some(Self::Tab),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Insert => Some(Self::Insert),
            KeyCode::Up => Some(Self::ArrowUp),
            KeyCode::Down => Some(Self::ArrowDown),
            KeyCode::Left => Some(Self::ArrowLeft),
            KeyCode::Right => Some(Self::ArrowRight),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown => Some(Self::PageDown),
            KeyCode::F(n) if (1..=20).contains(&n) => Some(Self::F(n)),
            KeyCode::CapsLock => Some(Self::CapsLock),
            KeyCode::NumLock => Some(Self::NumLock),
            KeyCode::ScrollLock => Some(Self::ScrollLock),
            KeyCode::Modifier(m) => Self::from_modifier(m),
            _ => None,
        }
    }

    fn from_modifier(code: ModifierKeyCode) -> Option<Self> {
        match code {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some(Self::Shift),
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some(Self::Control),
            ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some(Self::Alt),
            ModifierKeyCode::LeftSuper | ModifierKeyCode::RightSuper => Some(Self::Super),
            ModifierKeyCode::LeftHyper | ModifierKeyCode::RightHyper => Some(Self::Hyper),
            ModifierKeyCode::LeftMeta | ModifierKeyCode::RightMeta => Some(Self::Meta),
            ModifierKeyCode::IsoLevel3Shift => Some(Self::AltGraph),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Alt => write!(f, "Alt"),
            Self::AltGraph => write!(f, "AltGraph"),
            Self::CapsLock => write!(f, "CapsLock"),
            Self::Control => write!(f, "Control"),
            Self::Fn => write!(f, "Fn"),
            Self::FnLock => write!(f, "FnLock"),
            Self::Hyper => write!(f, "Hyper"),
            Self::Meta => write!(f, "Meta"),
            Self::NumLock => write!(f, "NumLock"),
            Self::ScrollLock => write!(f, "ScrollLock"),
            Self::Shift => write!(f, "Shift"),
            Self::Super => write!(f, "Super"),
            Self::Symbol => write!(f, "Symbol"),
            Self::SymbolLock => write!(f, "SymbolLock"),
            Self::Enter => write!(f, "Enter"),
            Self::Tab => write!(f, "Tab"),
            Self::Space => write!(f, "Space"),
            Self::ArrowDown => write!(f, "ArrowDown"),
            Self::ArrowLeft => write!(f, "ArrowLeft"),
            Self::ArrowRight => write!(f, "ArrowRight"),
            Self::ArrowUp => write!(f, "ArrowUp"),
            Self::End => write!(f, "End"),
            Self::Home => write!(f, "Home"),
            Self::PageDown => write!(f, "PageDown"),
            Self::PageUp => write!(f, "PageUp"),
            Self::Soft1 => write!(f, "Soft1"),
            Self::Soft2 => write!(f, "Soft2"),
            Self::Soft3 => write!(f, "Soft3"),
            Self::Soft4 => write!(f, "Soft4"),
            Self::Decimal => write!(f, "Decimal"),
            Self::Key11 => write!(f, "Key11"),
            Self::Key12 => write!(f, "Key12"),
            Self::Multiply => write!(f, "Multiply"),
            Self::Add => write!(f, "Add"),
            Self::Clear => write!(f, "Clear"),
            Self::Divide => write!(f, "Divide"),
            Self::Subtract => write!(f, "Subtract"),
            Self::Separator => write!(f, "Separator"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Copy => write!(f, "Copy"),
            Self::CrSel => write!(f, "CrSel"),
            Self::Cut => write!(f, "Cut"),
            Self::Delete => write!(f, "Delete"),
            Self::EraseEof => write!(f, "EraseEof"),
            Self::ExSel => write!(f, "ExSel"),
            Self::Insert => write!(f, "Insert"),
            Self::Paste => write!(f, "Paste"),
            Self::Redo => write!(f, "Redo"),
            Self::Undo => write!(f, "Undo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_from_char_normalizes_case() {
        assert_eq!(Key::from_char('S'), Some(Key::Char('s')));
        assert_eq!(Key::from_char('s'), Some(Key::Char('s')));
        assert_eq!(Key::from_char('7'), Some(Key::Char('7')));
    }

    #[test]
    fn test_from_char_rejects_non_alphanumeric() {
        assert_eq!(Key::from_char('-'), None);
        assert_eq!(Key::from_char(' '), None);
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn test_from_event_chars() {
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(Key::from_event(&event), Some(Key::Char('g')));

        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(Key::from_event(&event), Some(Key::Space));
    }

    #[test]
    fn test_from_event_named_keys() {
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(Key::from_event(&event), Some(Key::Enter));

        let event = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(Key::from_event(&event), Some(Key::PageDown));

        let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(Key::from_event(&event), Some(Key::F(5)));
    }

    #[test]
    fn test_from_event_outside_the_set() {
        // Esc is not a recognized identifier.
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(Key::from_event(&event), None);

        let event = KeyEvent::new(KeyCode::Char('%'), KeyModifiers::NONE);
        assert_eq!(Key::from_event(&event), None);
    }

    #[test]
    fn test_from_event_modifier_keys() {
        let event = KeyEvent::new(
            KeyCode::Modifier(ModifierKeyCode::LeftShift),
            KeyModifiers::NONE,
        );
        assert_eq!(Key::from_event(&event), Some(Key::Shift));

        let event = KeyEvent::new(
            KeyCode::Modifier(ModifierKeyCode::IsoLevel3Shift),
            KeyModifiers::NONE,
        );
        assert_eq!(Key::from_event(&event), Some(Key::AltGraph));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Key::Char('g').to_string(), "g");
        assert_eq!(Key::F(12).to_string(), "F12");
        assert_eq!(Key::ArrowUp.to_string(), "ArrowUp");
        assert_eq!(Key::Space.to_string(), "Space");
    }
}
