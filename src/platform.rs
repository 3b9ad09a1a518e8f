//! Platform query service.
//!
//! Exposes the two reactive values shortcut conditions depend on:
//! - whether the platform is macOS (drives the Meta → Ctrl remap)
//! - which text input, if any, currently has focus
//!
//! Hosts feed focus changes through [`PlatformService::focus_in`] and
//! [`PlatformService::focus_out`] from their own focus handlers.

use par_shortcuts_keybindings::target_is_macos;
use par_shortcuts_reactive::{Computed, Signal};

/// Text-input focus state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputFocus {
    /// No text input has focus.
    #[default]
    None,
    /// A text input without a name has focus.
    Anonymous,
    /// The text input with this name has focus.
    Named(String),
}

impl InputFocus {
    /// Whether any text input has focus.
    pub fn is_focused(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Name of the focused input, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

/// The element that just received focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTarget {
    /// Element tag name, e.g. "INPUT"
    pub tag: String,
    /// Value of the element's `name` attribute
    pub name: Option<String>,
    pub content_editable: bool,
}

impl FocusTarget {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn editable(mut self) -> Self {
        self.content_editable = true;
        self
    }

    /// Whether typing into this element produces text.
    pub fn is_text_input(&self) -> bool {
        self.content_editable
            || ["input", "textarea", "select"]
                .iter()
                .any(|tag| self.tag.eq_ignore_ascii_case(tag))
    }
}

/// Reactive platform state shared by every registrar of a host.
///
/// Cloning shares the underlying signals.
#[derive(Debug, Clone)]
pub struct PlatformService {
    is_macos: Signal<bool>,
    using_input: Signal<InputFocus>,
}

impl Default for PlatformService {
    fn default() -> Self {
        Self::detect()
    }
}

impl PlatformService {
    /// Platform state with an explicit macOS flag and no input focused.
    pub fn new(is_macos: bool) -> Self {
        Self {
            is_macos: Signal::new(is_macos),
            using_input: Signal::new(InputFocus::None),
        }
    }

    /// Platform state for the compile target.
    pub fn detect() -> Self {
        Self::new(target_is_macos())
    }

    pub fn is_macos(&self) -> bool {
        self.is_macos.get()
    }

    pub fn macos_signal(&self) -> Signal<bool> {
        self.is_macos.clone()
    }

    /// Signal holding the current input focus.
    pub fn using_input(&self) -> Signal<InputFocus> {
        self.using_input.clone()
    }

    /// Derived flag: any text input has focus.
    pub fn input_focused(&self) -> Computed<bool> {
        let focus = self.using_input.clone();
        Computed::new(move || focus.with(InputFocus::is_focused))
    }

    /// Derived flag: the input named `name` has focus.
    pub fn input_named(&self, name: impl Into<String>) -> Computed<bool> {
        let focus = self.using_input.clone();
        let name = name.into();
        Computed::new(move || focus.with(|focus| focus.name() == Some(name.as_str())))
    }

    pub fn set_input_focus(&self, focus: InputFocus) {
        if self.using_input.set(focus) {
            log::trace!("Input focus changed to {:?}", self.using_input.get());
        }
    }

    /// Record that `target` received focus.
    pub fn focus_in(&self, target: &FocusTarget) {
        let focus = if !target.is_text_input() {
            InputFocus::None
        } else {
            match target.name.as_deref() {
                Some(name) if !name.is_empty() => InputFocus::Named(name.to_string()),
                _ => InputFocus::Anonymous,
            }
        };
        self.set_input_focus(focus);
    }

    /// Record that focus left the current element.
    pub fn focus_out(&self) {
        self.set_input_focus(InputFocus::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_detection() {
        assert!(FocusTarget::new("INPUT").is_text_input());
        assert!(FocusTarget::new("textarea").is_text_input());
        assert!(FocusTarget::new("Select").is_text_input());
        assert!(FocusTarget::new("DIV").editable().is_text_input());
        assert!(!FocusTarget::new("BUTTON").is_text_input());
    }

    #[test]
    fn test_focus_in_named_input() {
        let platform = PlatformService::new(false);
        platform.focus_in(&FocusTarget::new("INPUT").named("search"));
        assert_eq!(
            platform.using_input().get(),
            InputFocus::Named("search".to_string())
        );
        assert!(platform.input_focused().get());
        assert!(platform.input_named("search").get());
        assert!(!platform.input_named("title").get());
    }

    #[test]
    fn test_focus_in_unnamed_input() {
        let platform = PlatformService::new(false);
        platform.focus_in(&FocusTarget::new("TEXTAREA").named(""));
        assert_eq!(platform.using_input().get(), InputFocus::Anonymous);
        assert!(platform.input_focused().get());
    }

    #[test]
    fn test_focus_on_non_input_clears() {
        let platform = PlatformService::new(false);
        platform.focus_in(&FocusTarget::new("INPUT"));
        platform.focus_in(&FocusTarget::new("BUTTON").named("ok"));
        assert!(!platform.input_focused().get());
    }

    #[test]
    fn test_focus_out() {
        let platform = PlatformService::new(true);
        let focused = platform.input_focused();
        platform.focus_in(&FocusTarget::new("INPUT"));
        assert!(focused.get());
        platform.focus_out();
        assert!(!focused.get());
        assert!(platform.is_macos());
    }
}
