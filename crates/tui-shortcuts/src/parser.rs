//! Key notation parser.

use crate::key::Key;
use thiserror::Error;

/// Error parsing a key notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty input
    #[error("empty key notation")]
    Empty,
    /// Unknown key name
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// Parse a key notation string into a [`Key`].
///
/// Names are case-insensitive and a few common aliases are accepted:
/// - `"a"`, `"7"` - letters and digits
/// - `"enter"`, `"return"`, `"tab"`, `"space"` - whitespace keys
/// - `"up"`/`"arrowup"`, `"pgdn"`/`"pagedown"` - navigation keys
/// - `"ctrl"`/`"control"`, `"shift"`, `"meta"` - modifier keys
/// - `"f1"` through `"f20"` - function keys
/// - `"backspace"`, `"del"`/`"delete"`, `"paste"` - editing keys
pub fn parse_key(s: &str) -> Result<Key, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let lower = s.to_ascii_lowercase();
    let key = match lower.as_str() {
        // Whitespace
        "enter" | "return" => Key::Enter,
        "tab" => Key::Tab,
        "space" => Key::Space,

        // Modifiers
        "alt" => Key::Alt,
        "altgraph" | "altgr" => Key::AltGraph,
        "capslock" => Key::CapsLock,
        "control" | "ctrl" => Key::Control,
        "fn" => Key::Fn,
        "fnlock" => Key::FnLock,
        "hyper" => Key::Hyper,
        "meta" => Key::Meta,
        "numlock" => Key::NumLock,
        "scrolllock" => Key::ScrollLock,
        "shift" => Key::Shift,
        "super" | "cmd" | "command" | "win" => Key::Super,
        "symbol" => Key::Symbol,
        "symbollock" => Key::SymbolLock,

        // Navigation
        "arrowup" | "up" => Key::ArrowUp,
        "arrowdown" | "down" => Key::ArrowDown,
        "arrowleft" | "left" => Key::ArrowLeft,
        "arrowright" | "right" => Key::ArrowRight,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "pgup" => Key::PageUp,
        "pagedown" | "pgdn" | "pgdown" => Key::PageDown,

        // Soft keys
        "soft1" => Key::Soft1,
        "soft2" => Key::Soft2,
        "soft3" => Key::Soft3,
        "soft4" => Key::Soft4,

        // Numeric keypad
        "decimal" => Key::Decimal,
        "key11" => Key::Key11,
        "key12" => Key::Key12,
        "multiply" => Key::Multiply,
        "add" => Key::Add,
        "clear" => Key::Clear,
        "divide" => Key::Divide,
        "subtract" => Key::Subtract,
        "separator" => Key::Separator,

        // Editing
        "backspace" | "bs" => Key::Backspace,
        "copy" => Key::Copy,
        "crsel" => Key::CrSel,
        "cut" => Key::Cut,
        "delete" | "del" => Key::Delete,
        "eraseeof" => Key::EraseEof,
        "exsel" => Key::ExSel,
        "insert" | "ins" => Key::Insert,
        "paste" => Key::Paste,
        "redo" => Key::Redo,
        "undo" => Key::Undo,

        // Function keys, then single character
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|rest| rest.parse::<u8>().ok()) {
                if (1..=20).contains(&n) {
                    return Ok(Key::F(n));
                }
            }
            if lower.len() == 1 {
                let c = lower.chars().next().unwrap();
                if let Some(key) = Key::from_char(c) {
                    return Ok(key);
                }
            }
            return Err(ParseError::UnknownKey(s.to_string()));
        }
    };

    Ok(key)
}

/// Parse a whitespace-separated key sequence, e.g. `"g t"` or `"ctrl x"`.
pub fn parse_sequence(s: &str) -> Result<Vec<Key>, ParseError> {
    let keys: Result<Vec<_>, _> = s.split_whitespace().map(parse_key).collect();
    let keys = keys?;
    if keys.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(keys)
}
