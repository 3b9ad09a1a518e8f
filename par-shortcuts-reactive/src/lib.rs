//! Reactive primitives for par-shortcuts.
//!
//! Shortcut conditions are derived booleans that must follow the values they
//! are built from (input focus, caller-supplied flags) without the registrar
//! re-subscribing to anything. This crate provides the small pull-based
//! reactive core used for that:
//!
//! - [`Signal<T>`]: a shared, mutable source value
//! - [`Computed<T>`]: a lazily cached value derived from signals
//! - [`logic_and`] / [`logic_not`]: boolean combinators over computed values
//!
//! Every successful [`Signal::set`] advances a process-wide change epoch.
//! A [`Computed`] remembers the epoch its cached value was produced at and
//! recomputes on the next read once the epoch has moved.

mod computed;
mod logic;
mod signal;

pub use computed::Computed;
pub use logic::{logic_and, logic_not};
pub use signal::{Signal, current_epoch};
