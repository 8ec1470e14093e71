//! Registry-wide default options.

use serde::{Deserialize, Serialize};

/// Default options read at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Milliseconds of inactivity after which a partial key sequence expires.
    /// `0` disables expiry.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Whether bindings render hint badges unless they say otherwise.
    #[serde(default = "default_generate_kbd")]
    pub generate_kbd: bool,
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_generate_kbd() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            generate_kbd: default_generate_kbd(),
        }
    }
}

impl Defaults {
    /// Merge a partial update, last write wins per field.
    pub fn apply(&mut self, update: DefaultsUpdate) {
        if let Some(timeout_ms) = update.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        if let Some(generate_kbd) = update.generate_kbd {
            self.generate_kbd = generate_kbd;
        }
    }
}

/// Partial update for [`Defaults`]; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefaultsUpdate {
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub generate_kbd: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.timeout_ms, 1000);
        assert!(defaults.generate_kbd);
    }

    #[test]
    fn test_apply_merges_per_field() {
        let mut defaults = Defaults::default();
        defaults.apply(DefaultsUpdate {
            generate_kbd: Some(false),
            ..DefaultsUpdate::default()
        });
        assert_eq!(defaults.timeout_ms, 1000);
        assert!(!defaults.generate_kbd);

        defaults.apply(DefaultsUpdate {
            timeout_ms: Some(250),
            ..DefaultsUpdate::default()
        });
        assert_eq!(defaults.timeout_ms, 250);
        assert!(!defaults.generate_kbd);
    }

    #[test]
    fn test_last_write_wins() {
        let mut defaults = Defaults::default();
        defaults.apply(DefaultsUpdate {
            timeout_ms: Some(100),
            ..DefaultsUpdate::default()
        });
        defaults.apply(DefaultsUpdate {
            timeout_ms: Some(200),
            ..DefaultsUpdate::default()
        });
        assert_eq!(defaults.timeout_ms, 200);
    }

    #[test]
    fn test_partial_toml_deserializes() {
        let defaults: Defaults = toml::from_str("generate_kbd = false").unwrap();
        assert_eq!(defaults.timeout_ms, 1000);
        assert!(!defaults.generate_kbd);

        let defaults: Defaults = toml::from_str("").unwrap();
        assert_eq!(defaults, Defaults::default());
    }
}
