//! Keybinding core for par-shortcuts.
//!
//! Turns declarative key specs (`"meta_k"`, `"shift_enter"`) into key combos
//! and matches keydown events against them.
//!
//! Features:
//! - Underscore key specs with `meta`, `ctrl`, `shift`, `alt` modifiers
//! - Meta → Ctrl remapping on non-macOS platforms
//! - DOM-style keydown events, optionally built from winit keys
//! - Ordered registry where the first matching combo wins

pub mod event;
mod matcher;
pub mod parser;
pub mod platform;

pub use event::KeyboardEvent;
pub use matcher::{KeybindingMatcher, is_alphabetical_key};
pub use parser::{KeyCombo, Modifiers, parse_key_spec};
pub use platform::{remap_meta_for_platform, target_is_macos};

/// Ordered list of key combos, each carrying a value.
///
/// Lookup scans in insertion order and stops at the first combo that matches
/// the event. Entries with identical combos are kept; only the first one is
/// ever returned.
#[derive(Debug)]
pub struct KeybindingRegistry<T> {
    bindings: Vec<(KeyCombo, T)>,
}

impl<T> Default for KeybindingRegistry<T> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<T> KeybindingRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding after all existing ones.
    pub fn push(&mut self, combo: KeyCombo, value: T) {
        self.bindings.push((combo, value));
    }

    /// Find the first binding matching a keydown event.
    pub fn find(&self, event: &KeyboardEvent) -> Option<(&KeyCombo, &T)> {
        let matcher = KeybindingMatcher::from_event(event);
        self.bindings
            .iter()
            .find(|(combo, _)| matcher.matches(combo))
            .map(|(combo, value)| (combo, value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, &T)> {
        self.bindings.iter().map(|(combo, value)| (combo, value))
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl<T> FromIterator<(KeyCombo, T)> for KeybindingRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (KeyCombo, T)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
