//! Platform-specific resolution.
//!
//! Contains:
//! - Meta → Ctrl remapping for non-macOS platforms
//! - winit `NamedKey` → DOM `key` value table

use crate::parser::Modifiers;
use winit::keyboard::NamedKey;

/// Whether this build targets macOS.
#[inline]
pub const fn target_is_macos() -> bool {
    cfg!(target_os = "macos")
}

/// Resolve the Meta modifier for the given platform.
///
/// - macOS: modifiers are kept as written.
/// - All other platforms: a bare `meta` (without `ctrl`) becomes `ctrl`, so a
///   `meta_k` shortcut answers to Ctrl+K there.
#[inline]
pub fn remap_meta_for_platform(modifiers: Modifiers, is_macos: bool) -> Modifiers {
    if !is_macos && modifiers.meta && !modifiers.ctrl {
        Modifiers {
            meta: false,
            ctrl: true,
            ..modifiers
        }
    } else {
        modifiers
    }
}

/// DOM `KeyboardEvent.key` value for a winit [`NamedKey`].
///
/// Covers the keys shortcuts are bound to in practice. Returns `None` for
/// anything else.
pub fn dom_key_for_named(named: NamedKey) -> Option<&'static str> {
    let key = match named {
        // Function keys
        NamedKey::F1 => "F1",
        NamedKey::F2 => "F2",
        NamedKey::F3 => "F3",
        NamedKey::F4 => "F4",
        NamedKey::F5 => "F5",
        NamedKey::F6 => "F6",
        NamedKey::F7 => "F7",
        NamedKey::F8 => "F8",
        NamedKey::F9 => "F9",
        NamedKey::F10 => "F10",
        NamedKey::F11 => "F11",
        NamedKey::F12 => "F12",

        // Common named keys
        NamedKey::Enter => "Enter",
        NamedKey::Escape => "Escape",
        NamedKey::Space => " ",
        NamedKey::Tab => "Tab",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        NamedKey::Insert => "Insert",
        NamedKey::Home => "Home",
        NamedKey::End => "End",
        NamedKey::PageUp => "PageUp",
        NamedKey::PageDown => "PageDown",

        // Arrow keys
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",

        // Modifiers pressed on their own
        NamedKey::Control => "Control",
        NamedKey::Shift => "Shift",
        NamedKey::Alt => "Alt",
        NamedKey::Super => "Meta",

        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_only() -> Modifiers {
        Modifiers {
            meta: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn test_meta_becomes_ctrl_off_macos() {
        let resolved = remap_meta_for_platform(meta_only(), false);
        assert!(!resolved.meta);
        assert!(resolved.ctrl);
    }

    #[test]
    fn test_meta_kept_on_macos() {
        let resolved = remap_meta_for_platform(meta_only(), true);
        assert!(resolved.meta);
        assert!(!resolved.ctrl);
    }

    #[test]
    fn test_meta_ctrl_untouched_off_macos() {
        let both = Modifiers {
            meta: true,
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(remap_meta_for_platform(both, false), both);
    }

    #[test]
    fn test_other_modifiers_preserved() {
        let mods = Modifiers {
            meta: true,
            shift: true,
            alt: true,
            ..Modifiers::default()
        };
        let resolved = remap_meta_for_platform(mods, false);
        assert!(resolved.shift && resolved.alt && resolved.ctrl);
    }

    #[test]
    fn test_dom_key_names() {
        assert_eq!(dom_key_for_named(NamedKey::Escape), Some("Escape"));
        assert_eq!(dom_key_for_named(NamedKey::Super), Some("Meta"));
        assert_eq!(dom_key_for_named(NamedKey::MediaPlay), None);
    }
}
