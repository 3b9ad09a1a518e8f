//! Mount-time compilation and per-event dispatch.

use super::{Condition, Handler, ShortcutsConfig};
use crate::platform::PlatformService;
use par_shortcuts_config::UsingInput;
use par_shortcuts_keybindings::{
    KeybindingRegistry, KeyboardEvent, parse_key_spec, remap_meta_for_platform,
};
use par_shortcuts_reactive::{logic_and, logic_not};
use std::fmt;

/// The activation half of a compiled shortcut; the registry holds its combo.
#[derive(Clone)]
pub struct CompiledShortcut {
    pub condition: Condition,
    handler: Handler,
}

impl CompiledShortcut {
    pub fn new(condition: Condition, handler: Handler) -> Self {
        Self { condition, handler }
    }

    /// Whether the shortcut would fire right now.
    pub fn is_active(&self) -> bool {
        self.condition.get()
    }

    /// Invoke the handler unconditionally.
    pub fn fire(&self) {
        (self.handler)();
    }
}

impl fmt::Debug for CompiledShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledShortcut")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

/// Build the activation condition of a shortcut.
///
/// - [`UsingInput::Unfocused`]: no text input may have focus
/// - [`UsingInput::Named`]: the input with that name must have focus
/// - [`UsingInput::Any`]: focus is not considered
///
/// Every `whenever` condition is ANDed in. The result re-evaluates on read
/// whenever the focus signal or any `whenever` signal has changed.
pub fn build_condition(
    using_input: &UsingInput,
    whenever: &[Condition],
    platform: &PlatformService,
) -> Condition {
    let mut conditions = Vec::with_capacity(whenever.len() + 1);
    match using_input {
        UsingInput::Unfocused => conditions.push(logic_not(platform.input_focused())),
        UsingInput::Named(name) => conditions.push(platform.input_named(name.as_str())),
        UsingInput::Any => {}
    }
    conditions.extend(whenever.iter().cloned());
    logic_and(conditions)
}

/// Compile every well-formed entry of `config` in mapping order.
///
/// Disabled entries and configs without a handler are dropped with a trace
/// diagnostic. Meta is remapped to Ctrl when the platform is not macOS.
pub fn compile_shortcuts(
    config: &ShortcutsConfig,
    platform: &PlatformService,
) -> KeybindingRegistry<CompiledShortcut> {
    let is_macos = platform.is_macos();
    let mut registry = KeybindingRegistry::new();

    for (spec, entry) in config.iter() {
        let Some(entry) = entry else {
            log::trace!("[Shortcut] Invalid value for '{}': entry is empty", spec);
            continue;
        };
        let Some(handler) = entry.handler() else {
            log::trace!("[Shortcut] Invalid value for '{}': no handler", spec);
            continue;
        };

        let mut combo = parse_key_spec(spec);
        combo.modifiers = remap_meta_for_platform(combo.modifiers, is_macos);

        let condition = build_condition(&entry.using_input(), entry.whenever(), platform);
        log::debug!("Compiled shortcut '{}' as {}", spec, combo);
        registry.push(combo, CompiledShortcut::new(condition, handler.clone()));
    }

    registry
}

/// Outcome of offering one keydown event to a compiled registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No shortcut matched; the event is untouched.
    Unmatched,
    /// The first matching shortcut's condition was false; the event is untouched.
    Inactive,
    /// The first matching shortcut fired and the default was prevented.
    Fired,
}

/// Offer a keydown event to the compiled shortcuts.
///
/// Only the first matching shortcut is considered. If its condition is false
/// nothing happens, even if a later shortcut with the same combination is
/// active.
pub fn dispatch(
    registry: &KeybindingRegistry<CompiledShortcut>,
    event: &mut KeyboardEvent,
) -> Dispatch {
    let Some((combo, shortcut)) = registry.find(event) else {
        return Dispatch::Unmatched;
    };

    if !shortcut.is_active() {
        log::trace!("Shortcut {} matched but is inactive", combo);
        return Dispatch::Inactive;
    }

    event.prevent_default();
    log::trace!("Firing shortcut {}", combo);
    shortcut.fire();
    Dispatch::Fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FocusTarget, InputFocus};
    use crate::shortcuts::ShortcutConfig;
    use par_shortcuts_reactive::{Computed, Signal};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_compile_drops_malformed_entries() {
        let platform = PlatformService::new(true);
        let config = ShortcutsConfig::new()
            .on("meta_k", || {})
            .disabled("escape")
            .with("enter", ShortcutConfig::default());

        let registry = compile_shortcuts(&config, &platform);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_compile_remaps_meta_off_macos() {
        let config = ShortcutsConfig::new().on("meta_s", || {});

        let linux = compile_shortcuts(&config, &PlatformService::new(false));
        let (combo, _) = linux.iter().next().unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(!combo.modifiers.meta);

        let mac = compile_shortcuts(&config, &PlatformService::new(true));
        let (combo, _) = mac.iter().next().unwrap();
        assert!(!combo.modifiers.ctrl);
        assert!(combo.modifiers.meta);
    }

    #[test]
    fn test_condition_unfocused() {
        let platform = PlatformService::new(false);
        let condition = build_condition(&UsingInput::Unfocused, &[], &platform);
        assert!(condition.get());
        platform.focus_in(&FocusTarget::new("INPUT"));
        assert!(!condition.get());
    }

    #[test]
    fn test_condition_named() {
        let platform = PlatformService::new(false);
        let condition = build_condition(&UsingInput::named("search"), &[], &platform);
        assert!(!condition.get());
        platform.set_input_focus(InputFocus::Named("search".to_string()));
        assert!(condition.get());
        platform.set_input_focus(InputFocus::Named("title".to_string()));
        assert!(!condition.get());
        platform.set_input_focus(InputFocus::Anonymous);
        assert!(!condition.get());
    }

    #[test]
    fn test_condition_any_ignores_focus() {
        let platform = PlatformService::new(false);
        let condition = build_condition(&UsingInput::Any, &[], &platform);
        assert!(condition.get());
        platform.set_input_focus(InputFocus::Anonymous);
        assert!(condition.get());
    }

    #[test]
    fn test_condition_whenever() {
        let platform = PlatformService::new(false);
        let open = Signal::new(false);
        let condition = build_condition(
            &UsingInput::Any,
            &[Computed::from(open.clone()), Computed::constant(true)],
            &platform,
        );
        assert!(!condition.get());
        open.set(true);
        assert!(condition.get());
    }

    #[test]
    fn test_dispatch_fires_and_prevents_default() {
        let platform = PlatformService::new(true);
        let (count, handler) = counter();
        let registry = compile_shortcuts(&ShortcutsConfig::new().on("meta_k", handler), &platform);

        let mut event = KeyboardEvent::new("k").with_meta();
        assert_eq!(dispatch(&registry, &mut event), Dispatch::Fired);
        assert!(event.default_prevented());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let mut other = KeyboardEvent::new("j").with_meta();
        assert_eq!(dispatch(&registry, &mut other), Dispatch::Unmatched);
        assert!(!other.default_prevented());
    }

    #[test]
    fn test_dispatch_first_match_wins_without_fallthrough() {
        let platform = PlatformService::new(true);
        let (first_count, first) = counter();
        let (second_count, second) = counter();
        let enabled = Signal::new(false);
        let config = ShortcutsConfig::new()
            .with(
                "ctrl_k",
                ShortcutConfig::new(first).whenever(enabled.clone()),
            )
            .on("k_ctrl", second);
        let registry = compile_shortcuts(&config, &platform);

        let mut event = KeyboardEvent::new("k").with_ctrl();
        assert_eq!(dispatch(&registry, &mut event), Dispatch::Inactive);
        assert!(!event.default_prevented());
        assert_eq!(second_count.load(Ordering::SeqCst), 0);

        enabled.set(true);
        let mut event = KeyboardEvent::new("k").with_ctrl();
        assert_eq!(dispatch(&registry, &mut event), Dispatch::Fired);
        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 0);
    }
}
