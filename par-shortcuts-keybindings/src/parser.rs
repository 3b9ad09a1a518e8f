//! Key-spec parser.
//!
//! Parses underscore-joined key specs like `"ctrl_shift_k"` into [`KeyCombo`]
//! structs. Parsing never fails: anything that is not one of the four
//! modifier names becomes part of the key.

use std::fmt;

/// Names recognised as modifiers, in canonical display order.
pub const MODIFIER_NAMES: [&str; 4] = ["meta", "ctrl", "shift", "alt"];

/// Set of modifiers for a key combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// A parsed key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Lowercase key, compared against the lowercased event key.
    pub key: String,
    pub modifiers: Modifiers,
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.meta {
            parts.push("meta");
        }
        if self.modifiers.ctrl {
            parts.push("ctrl");
        }
        if self.modifiers.shift {
            parts.push("shift");
        }
        if self.modifiers.alt {
            parts.push("alt");
        }
        parts.push(&self.key);

        write!(f, "{}", parts.join("_"))
    }
}

/// Whether `segment` is one of the modifier names.
pub fn is_modifier_name(segment: &str) -> bool {
    MODIFIER_NAMES.iter().any(|name| *name == segment)
}

/// Parse a key spec into a KeyCombo.
///
/// Format: `modifier_modifier_key`, case-insensitive, modifiers in any order.
///
/// Modifiers: `meta`, `ctrl`, `shift`, `alt`.
///
/// The key is every non-modifier segment joined back with `_`, so a spec with
/// two non-modifier segments such as `"k_j"` yields the key `"k_j"`. That key
/// will only match an event whose `key` is literally `k_j`; it is not a
/// two-key sequence.
pub fn parse_key_spec(spec: &str) -> KeyCombo {
    let lower = spec.to_lowercase();
    let segments: Vec<&str> = lower.split('_').collect();

    let has = |name: &str| segments.iter().any(|segment| *segment == name);
    let modifiers = Modifiers {
        meta: has("meta"),
        ctrl: has("ctrl"),
        shift: has("shift"),
        alt: has("alt"),
    };

    let key = segments
        .iter()
        .copied()
        .filter(|segment| !is_modifier_name(segment))
        .collect::<Vec<_>>()
        .join("_");

    KeyCombo { key, modifiers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_key() {
        let combo = parse_key_spec("k");
        assert_eq!(combo.key, "k");
        assert_eq!(combo.modifiers, Modifiers::default());
    }

    #[test]
    fn test_meta_key() {
        let combo = parse_key_spec("meta_k");
        assert!(combo.modifiers.meta);
        assert!(!combo.modifiers.ctrl);
        assert_eq!(combo.key, "k");
    }

    #[test]
    fn test_case_insensitive() {
        let combo = parse_key_spec("Ctrl_Shift_K");
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, "k");
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(parse_key_spec("ctrl_shift_k"), parse_key_spec("shift_ctrl_k"));
        assert_eq!(parse_key_spec("k_alt"), parse_key_spec("alt_k"));
    }

    #[test]
    fn test_named_key() {
        let combo = parse_key_spec("shift_enter");
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, "enter");
    }

    #[test]
    fn test_two_plain_segments_concatenate() {
        let combo = parse_key_spec("k_j");
        assert_eq!(combo.key, "k_j");
        assert_eq!(combo.modifiers, Modifiers::default());
    }

    #[test]
    fn test_modifier_only_has_empty_key() {
        let combo = parse_key_spec("ctrl_shift");
        assert_eq!(combo.key, "");
        assert!(combo.modifiers.ctrl && combo.modifiers.shift);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(parse_key_spec("alt_k_shift_META").to_string(), "meta_shift_alt_k");
        assert_eq!(parse_key_spec("Escape").to_string(), "escape");
    }
}
