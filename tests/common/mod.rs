//! Shared integration test helpers for par-shortcuts.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use par_shortcuts::{Document, PlatformService};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many times its handler ran.
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that increments this counter.
    pub fn handler(&self) -> impl Fn() + Send + Sync + use<> {
        let hits = Arc::clone(&self.0);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn hits(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A fresh document and a platform with the given macOS flag.
pub fn host(is_macos: bool) -> (Document, PlatformService) {
    (Document::new(), PlatformService::new(is_macos))
}
