//! Lazily cached derived values.

use crate::signal::{Signal, current_epoch};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type ComputeFn<T> = dyn Fn() -> T + Send + Sync;

struct Inner<T> {
    compute: Box<ComputeFn<T>>,
    /// Cached value and the epoch it was computed at.
    cached: Mutex<Option<(u64, T)>>,
}

/// A value derived from signals (or other computed values).
///
/// The computation runs on first read and again on any read after a signal
/// has changed. Dependencies are never registered explicitly: the closure
/// simply reads whatever it needs.
///
/// ```
/// use par_shortcuts_reactive::{Computed, Signal};
///
/// let count = Signal::new(2);
/// let doubled = {
///     let count = count.clone();
///     Computed::new(move || count.get() * 2)
/// };
/// assert_eq!(doubled.get(), 4);
/// count.set(5);
/// assert_eq!(doubled.get(), 10);
/// ```
pub struct Computed<T> {
    inner: Arc<Inner<T>>,
}

impl<T: Clone + Send + 'static> Computed<T> {
    /// Create a computed value from a derivation closure.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                compute: Box::new(compute),
                cached: Mutex::new(None),
            }),
        }
    }

    /// A computed value that never changes.
    pub fn constant(value: T) -> Self
    where
        T: Sync,
    {
        Self::new(move || value.clone())
    }

    /// Get the current value, recomputing if any signal changed since the
    /// last read.
    pub fn get(&self) -> T {
        let epoch = current_epoch();
        if let Some((cached_epoch, value)) = self.inner.cached.lock().as_ref()
            && *cached_epoch == epoch
        {
            return value.clone();
        }

        // The lock is released while computing: the closure may read other
        // computed values.
        let value = (self.inner.compute)();
        *self.inner.cached.lock() = Some((epoch, value.clone()));
        value
    }
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> From<Signal<T>> for Computed<T> {
    fn from(signal: Signal<T>) -> Self {
        Computed::new(move || signal.get())
    }
}

impl<T: fmt::Debug> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.inner.cached.lock();
        f.debug_struct("Computed")
            .field("cached", &cached.as_ref().map(|(_, value)| value))
            .finish()
    }
}
