//! Shortcut bindings file loading and path resolution.

use crate::error::ConfigError;
use crate::types::ShortcutBinding;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a `shortcuts.yaml` file.
///
/// ```yaml
/// shortcuts:
///   - key: meta_k
///     action: open_command_palette
///   - key: escape
///     action: close_search
///     using_input: search
///     whenever: [search_open]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutFile {
    /// Bindings in declaration order; the first binding of a key wins.
    #[serde(default)]
    pub shortcuts: Vec<ShortcutBinding>,
}

impl ShortcutFile {
    /// Default location: `<config_dir>/par-shortcuts/shortcuts.yaml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("par-shortcuts")
            .join("shortcuts.yaml")
    }

    /// Parse and validate bindings from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: Self = serde_yaml_ng::from_str(contents)?;
        file.validate()?;
        Ok(file)
    }

    /// Load bindings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading shortcuts from {:?}", path);
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("failed to read shortcuts file {}", path.display()))?;
        let file = Self::from_yaml_str(&contents)
            .with_context(|| format!("invalid shortcuts file {}", path.display()))?;
        log::info!("Loaded {} shortcut bindings", file.shortcuts.len());
        Ok(file)
    }

    /// Load bindings from `path`, or an empty set if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("Shortcuts file {:?} not found, using no bindings", path);
            Ok(Self::default())
        }
    }

    /// Reject entries that cannot name a key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, binding) in self.shortcuts.iter().enumerate() {
            if binding.key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "shortcut #{} (action '{}') has an empty key",
                    index + 1,
                    binding.action
                )));
            }
            if binding.action.trim().is_empty() {
                log::warn!(
                    "Shortcut '{}' has no action and will never fire",
                    binding.key
                );
            }
        }
        Ok(())
    }

    /// Check if the file declares any bindings.
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
