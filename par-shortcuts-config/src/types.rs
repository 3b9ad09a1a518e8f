//! Shortcut binding types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Input focus gating
// ============================================================================

/// When a shortcut may fire relative to text-input focus.
///
/// In YAML this is written as a bool or a string:
/// - absent, `false` or `""`: [`UsingInput::Unfocused`]
/// - `true`: [`UsingInput::Any`]
/// - `"search"`: [`UsingInput::Named`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "UsingInputRepr", into = "UsingInputRepr")]
pub enum UsingInput {
    /// Only while no text input has focus.
    #[default]
    Unfocused,
    /// Regardless of input focus.
    Any,
    /// Only while the input with this name has focus.
    Named(String),
}

impl UsingInput {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::Unfocused
        } else {
            Self::Named(name)
        }
    }

    pub fn is_unfocused(&self) -> bool {
        matches!(self, Self::Unfocused)
    }
}

impl From<bool> for UsingInput {
    fn from(any: bool) -> Self {
        if any { Self::Any } else { Self::Unfocused }
    }
}

impl From<&str> for UsingInput {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum UsingInputRepr {
    Flag(bool),
    Name(String),
}

impl From<UsingInputRepr> for UsingInput {
    fn from(repr: UsingInputRepr) -> Self {
        match repr {
            UsingInputRepr::Flag(any) => any.into(),
            UsingInputRepr::Name(name) => Self::named(name),
        }
    }
}

impl From<UsingInput> for UsingInputRepr {
    fn from(value: UsingInput) -> Self {
        match value {
            UsingInput::Unfocused => UsingInputRepr::Flag(false),
            UsingInput::Any => UsingInputRepr::Flag(true),
            UsingInput::Named(name) => UsingInputRepr::Name(name),
        }
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// A shortcut binding entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    /// Key spec, e.g. "meta_k"
    pub key: String,
    /// Action name, e.g. "open_command_palette"
    pub action: String,
    #[serde(default, skip_serializing_if = "UsingInput::is_unfocused")]
    pub using_input: UsingInput,
    /// Names of extra conditions that must all hold
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whenever: Vec<String>,
}

impl ShortcutBinding {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            using_input: UsingInput::default(),
            whenever: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_using_input_from_yaml() {
        let parse = |yaml: &str| serde_yaml_ng::from_str::<UsingInput>(yaml).unwrap();
        assert_eq!(parse("true"), UsingInput::Any);
        assert_eq!(parse("false"), UsingInput::Unfocused);
        assert_eq!(parse("search"), UsingInput::Named("search".to_string()));
        assert_eq!(parse("''"), UsingInput::Unfocused);
    }

    #[test]
    fn test_binding_defaults() {
        let binding: ShortcutBinding =
            serde_yaml_ng::from_str("key: meta_k\naction: palette\n").unwrap();
        assert_eq!(binding, ShortcutBinding::new("meta_k", "palette"));
    }

    #[test]
    fn test_binding_serializes_without_defaults() {
        let yaml = serde_yaml_ng::to_string(&ShortcutBinding::new("escape", "close")).unwrap();
        assert!(!yaml.contains("using_input"));
        assert!(!yaml.contains("whenever"));
    }
}
