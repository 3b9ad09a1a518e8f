//! Declarative keyboard shortcuts bound to a component's lifetime.
//!
//! A [`ShortcutsConfig`] maps key specs (`"meta_k"`, `"shift_enter"`) to
//! handlers, optionally gated by input focus and extra conditions.
//! [`define_shortcuts`] turns it into a [`ShortcutRegistrar`] that compiles
//! the mapping when mounted and listens for keydown events until unmounted.
//!
//! ```
//! use par_shortcuts::{Document, PlatformService, ShortcutsConfig, define_shortcuts};
//! use par_shortcuts::KeyboardEvent;
//!
//! let document = Document::new();
//! let platform = PlatformService::new(true);
//! let config = ShortcutsConfig::new().on("meta_k", || println!("palette"));
//!
//! let mut shortcuts = define_shortcuts(config, &platform, &document);
//! shortcuts.mount();
//!
//! let mut event = KeyboardEvent::new("k").with_meta();
//! document.dispatch_keydown(&mut event);
//! assert!(event.default_prevented());
//! ```

mod compile;
mod registrar;

pub use compile::{CompiledShortcut, Dispatch, build_condition, compile_shortcuts, dispatch};
pub use registrar::{ShortcutRegistrar, define_shortcuts};

use par_shortcuts_config::UsingInput;
use par_shortcuts_reactive::Computed;
use std::fmt;
use std::sync::Arc;

/// Function invoked when a shortcut fires.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Reactive boolean gating a shortcut.
pub type Condition = Computed<bool>;

/// Full configuration of one shortcut.
#[derive(Clone, Default)]
pub struct ShortcutConfig {
    /// Missing handlers make the entry malformed; it is dropped on mount.
    pub handler: Option<Handler>,
    pub using_input: UsingInput,
    /// Extra conditions; all must hold for the shortcut to fire.
    pub whenever: Vec<Condition>,
}

impl ShortcutConfig {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Some(Arc::new(handler)),
            ..Self::default()
        }
    }

    pub fn using_input(mut self, using_input: impl Into<UsingInput>) -> Self {
        self.using_input = using_input.into();
        self
    }

    pub fn whenever(mut self, condition: impl Into<Condition>) -> Self {
        self.whenever.push(condition.into());
        self
    }
}

impl fmt::Debug for ShortcutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutConfig")
            .field("has_handler", &self.handler.is_some())
            .field("using_input", &self.using_input)
            .field("whenever", &self.whenever.len())
            .finish()
    }
}

/// Value of a configuration entry: a bare handler or a full config.
#[derive(Clone)]
pub enum ShortcutEntry {
    Handler(Handler),
    Config(ShortcutConfig),
}

impl ShortcutEntry {
    pub fn handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(handler) => Some(handler),
            Self::Config(config) => config.handler.as_ref(),
        }
    }

    pub fn using_input(&self) -> UsingInput {
        match self {
            Self::Handler(_) => UsingInput::default(),
            Self::Config(config) => config.using_input.clone(),
        }
    }

    pub fn whenever(&self) -> &[Condition] {
        match self {
            Self::Handler(_) => &[],
            Self::Config(config) => &config.whenever,
        }
    }
}

impl From<ShortcutConfig> for ShortcutEntry {
    fn from(config: ShortcutConfig) -> Self {
        Self::Config(config)
    }
}

impl fmt::Debug for ShortcutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(_) => f.write_str("Handler(..)"),
            Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
        }
    }
}

/// Ordered mapping from key specs to shortcut entries.
///
/// Iteration follows insertion order, which is also match priority.
/// Inserting a key that already exists replaces its value in place.
/// A `None` value marks a disabled entry; it is skipped on mount.
#[derive(Debug, Clone, Default)]
pub struct ShortcutsConfig {
    entries: Vec<(String, Option<ShortcutEntry>)>,
}

impl ShortcutsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry for `key`, keeping its position if it already exists.
    pub fn insert(&mut self, key: impl Into<String>, entry: Option<ShortcutEntry>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Bind `key` to a bare handler.
    pub fn on<F>(mut self, key: impl Into<String>, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.insert(key, Some(ShortcutEntry::Handler(Arc::new(handler))));
        self
    }

    /// Bind `key` to a full shortcut config.
    pub fn with(mut self, key: impl Into<String>, config: ShortcutConfig) -> Self {
        self.insert(key, Some(config.into()));
        self
    }

    /// Declare `key` without a value.
    pub fn disabled(mut self, key: impl Into<String>) -> Self {
        self.insert(key, None);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ShortcutEntry>)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
