//! Configuration types for par-shortcuts.
//!
//! This crate provides:
//!
//! - [`UsingInput`]: the input-focus gating rule of a shortcut
//! - [`ShortcutBinding`] / [`ShortcutFile`]: a declarative YAML file binding
//!   key specs to named actions
//! - [`ConfigError`]: typed failures for loading that file

mod error;
mod file;
mod types;

pub use error::ConfigError;
pub use file::ShortcutFile;
pub use types::{ShortcutBinding, UsingInput};
