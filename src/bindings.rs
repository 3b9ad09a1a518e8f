//! Resolve a declarative bindings file into a shortcut configuration.
//!
//! A `shortcuts.yaml` names actions and conditions; the host registers the
//! matching handlers and signals in an [`ActionTable`].

use crate::shortcuts::{Condition, Handler, ShortcutConfig, ShortcutEntry, ShortcutsConfig};
use anyhow::Result;
use par_shortcuts_config::ShortcutFile;
use par_shortcuts_reactive::{Computed, Signal};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Named handlers and conditions available to bindings files.
#[derive(Default)]
pub struct ActionTable {
    actions: HashMap<String, Handler>,
    conditions: HashMap<String, Signal<bool>>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for an action name, replacing any previous one.
    pub fn register_action<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(handler));
        self
    }

    /// Register the signal behind a condition name.
    pub fn register_condition(&mut self, name: impl Into<String>, signal: Signal<bool>) -> &mut Self {
        self.conditions.insert(name.into(), signal);
        self
    }

    pub fn action(&self, name: &str) -> Option<&Handler> {
        self.actions.get(name)
    }

    pub fn condition(&self, name: &str) -> Option<&Signal<bool>> {
        self.conditions.get(name)
    }
}

impl std::fmt::Debug for ActionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut actions: Vec<_> = self.actions.keys().collect();
        actions.sort();
        let mut conditions: Vec<_> = self.conditions.keys().collect();
        conditions.sort();
        f.debug_struct("ActionTable")
            .field("actions", &actions)
            .field("conditions", &conditions)
            .finish()
    }
}

impl ShortcutsConfig {
    /// Build a configuration from a bindings file.
    ///
    /// Unknown actions yield an entry without a handler, which is dropped on
    /// mount. Unknown condition names are replaced by a condition that is
    /// never true, so the shortcut stays inert rather than firing unguarded.
    /// When a key is bound more than once the first binding is kept.
    pub fn from_bindings(file: &ShortcutFile, table: &ActionTable) -> Self {
        let mut config = Self::new();
        let mut seen = HashSet::new();

        for binding in &file.shortcuts {
            if !seen.insert(binding.key.as_str()) {
                log::warn!(
                    "Shortcut '{}' is bound more than once, ignoring action '{}'",
                    binding.key,
                    binding.action
                );
                continue;
            }

            let handler = table.action(&binding.action).cloned();
            if handler.is_none() {
                log::warn!(
                    "Shortcut '{}' refers to unknown action '{}'",
                    binding.key,
                    binding.action
                );
            }

            let whenever: Vec<Condition> = binding
                .whenever
                .iter()
                .map(|name| match table.condition(name) {
                    Some(signal) => Computed::from(signal.clone()),
                    None => {
                        log::warn!(
                            "Shortcut '{}' refers to unknown condition '{}'",
                            binding.key,
                            name
                        );
                        Computed::constant(false)
                    }
                })
                .collect();

            config.insert(
                binding.key.clone(),
                Some(ShortcutEntry::Config(ShortcutConfig {
                    handler,
                    using_input: binding.using_input.clone(),
                    whenever,
                })),
            );
        }

        config
    }
}

/// Load a bindings file and resolve it against `table`.
///
/// A missing file yields an empty configuration.
pub fn load_shortcuts(path: &Path, table: &ActionTable) -> Result<ShortcutsConfig> {
    let file = ShortcutFile::load_or_default(path)?;
    Ok(ShortcutsConfig::from_bindings(&file, table))
}
