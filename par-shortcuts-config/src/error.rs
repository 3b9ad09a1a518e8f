//! Typed error variants for the par-shortcuts-config crate.
//!
//! `ShortcutFile::load` returns `anyhow::Result`; callers that need to tell
//! failure modes apart can downcast to [`ConfigError`]:
//!
//! ```rust,no_run
//! use par_shortcuts_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when reading a shortcut bindings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("I/O error reading shortcuts file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contained YAML that does not describe a bindings list.
    #[error("YAML parse error in shortcuts file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A binding failed semantic validation.
    ///
    /// The inner string names the offending entry and why.
    #[error("Shortcuts validation error: {0}")]
    Validation(String),
}
