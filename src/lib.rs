//! Library exports for par-shortcuts.
//!
//! Concurrency note: everything here runs on the host's UI thread. Shared
//! state (signals, the document listener list) uses `parking_lot` locks so
//! handles can still be `Send + Sync` and captured by handlers; locks are
//! never held while user handlers run.

/// Library version, for hosts that report it in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bindings;
pub mod document;
pub mod platform;
pub mod shortcuts;

pub use bindings::{ActionTable, load_shortcuts};
pub use document::{Document, KeydownListener, ListenerGuard, ListenerId};
pub use platform::{FocusTarget, InputFocus, PlatformService};
pub use shortcuts::{
    CompiledShortcut, Condition, Dispatch, Handler, ShortcutConfig, ShortcutEntry,
    ShortcutRegistrar, ShortcutsConfig, define_shortcuts,
};

// Re-exports so hosts depend on one crate.
pub use par_shortcuts_config::{ConfigError, ShortcutBinding, ShortcutFile, UsingInput};
pub use par_shortcuts_keybindings::{KeyCombo, KeyboardEvent, Modifiers, parse_key_spec};
pub use par_shortcuts_reactive::{Computed, Signal, logic_and, logic_not};
