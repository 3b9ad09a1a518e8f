//! Global keydown event target.
//!
//! `Document` stands in for the host's top-level event surface: components
//! attach keydown listeners to it and the host dispatches every keyboard-down
//! event through it.
//!
//! Listeners are normally held through a [`ListenerGuard`], which detaches
//! the listener when dropped so a listener cannot outlive its owner.

use par_shortcuts_keybindings::KeyboardEvent;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Callback invoked for every dispatched keydown event.
pub type KeydownListener = Arc<dyn Fn(&mut KeyboardEvent) + Send + Sync>;

/// Identifies an attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct DocumentInner {
    listeners: Mutex<Vec<(ListenerId, KeydownListener)>>,
    next_id: AtomicU64,
}

/// Keydown event target shared by a host and its components.
///
/// Cloning yields another handle to the same target.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a keydown listener. It stays attached until
    /// [`remove_listener`](Self::remove_listener) is called with the returned id.
    pub fn add_keydown_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&mut KeyboardEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Detach a listener. Returns `true` if it was attached.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Attach a keydown listener that is detached when the guard drops.
    pub fn listen<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&mut KeyboardEvent) + Send + Sync + 'static,
    {
        let id = self.add_keydown_listener(listener);
        ListenerGuard {
            document: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver a keydown event to every attached listener in attach order.
    ///
    /// The listener list is snapshotted first, so listeners may attach or
    /// detach listeners (including themselves) while the event is delivered.
    pub fn dispatch_keydown(&self, event: &mut KeyboardEvent) {
        let listeners: Vec<KeydownListener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&mut *event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

/// Keeps a keydown listener attached; detaches it on drop.
///
/// The guard holds only a weak reference to the document, so it never keeps
/// a document alive on its own.
pub struct ListenerGuard {
    document: Weak<DocumentInner>,
    id: ListenerId,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.document.upgrade() {
            let document = Document { inner };
            if document.remove_listener(self.id) {
                log::trace!("Detached keydown listener {:?}", self.id);
            }
        }
    }
}
