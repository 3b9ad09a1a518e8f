//! Keydown events as seen by the shortcut matcher.

use crate::platform::dom_key_for_named;
use winit::keyboard::{Key, ModifiersState};

/// A keyboard-down event.
///
/// `key` follows DOM `KeyboardEvent.key` conventions: the produced character
/// for printable keys (`"k"`, `"K"`, `"1"`, `"!"`) and the key value name for
/// the rest (`"Enter"`, `"Escape"`, `"ArrowUp"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: String,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    default_prevented: bool,
}

impl KeyboardEvent {
    /// An event for `key` with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    /// Build an event from a winit logical key and modifier state.
    ///
    /// Returns `None` for keys with no DOM `key` equivalent here
    /// (unidentified and dead keys, modifier-less named keys we do not map).
    pub fn from_winit(key: &Key, modifiers: ModifiersState) -> Option<Self> {
        let key = match key {
            Key::Character(text) => text.to_string(),
            Key::Named(named) => dom_key_for_named(*named)?.to_string(),
            _ => return None,
        };

        Some(Self {
            key,
            ctrl_key: modifiers.control_key(),
            meta_key: modifiers.super_key(),
            shift_key: modifiers.shift_key(),
            alt_key: modifiers.alt_key(),
            default_prevented: false,
        })
    }

    /// Suppress the host's default handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
