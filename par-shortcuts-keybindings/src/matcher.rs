//! Key event matching.
//!
//! Matches keydown events against parsed KeyCombos.
//!
//! Rules:
//! - The lowercased event key must equal the combo key.
//! - Meta and Ctrl must match exactly.
//! - Shift is compared only for alphabetical keys (a single lowercase ASCII
//!   letter as reported by the event). For anything else Shift already
//!   changed which character was reported.
//! - Alt is never compared; it changes the produced key on most layouts.

use crate::event::KeyboardEvent;
use crate::parser::{KeyCombo, Modifiers};

/// Matcher for comparing a keydown event against key combos.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Lowercased event key
    key: String,
    /// Active modifiers from the event
    modifiers: Modifiers,
    /// Whether the raw event key is a single lowercase letter
    alphabetical: bool,
}

impl KeybindingMatcher {
    /// Create a matcher from a keydown event.
    pub fn from_event(event: &KeyboardEvent) -> Self {
        Self {
            key: event.key.to_lowercase(),
            modifiers: Modifiers {
                meta: event.meta_key,
                ctrl: event.ctrl_key,
                shift: event.shift_key,
                alt: event.alt_key,
            },
            alphabetical: is_alphabetical_key(&event.key),
        }
    }

    /// Check if this event matches the given key combo.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        // Check key first (quick rejection)
        if self.key != combo.key {
            return false;
        }

        self.modifiers_match(&combo.modifiers)
    }

    fn modifiers_match(&self, combo_mods: &Modifiers) -> bool {
        if self.modifiers.meta != combo_mods.meta || self.modifiers.ctrl != combo_mods.ctrl {
            return false;
        }
        !self.alphabetical || self.modifiers.shift == combo_mods.shift
    }

    pub fn is_alphabetical(&self) -> bool {
        self.alphabetical
    }
}

/// `true` iff `key` is exactly one lowercase ASCII letter.
///
/// Uppercase letters do not count: browsers report `"K"` when Shift is held,
/// and that event is treated like any other non-alphabetical key.
pub fn is_alphabetical_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}
