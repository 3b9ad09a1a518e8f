//! Shortcut lifecycle: idle ⇄ listening.

use super::ShortcutsConfig;
use super::compile::{compile_shortcuts, dispatch};
use crate::document::{Document, ListenerGuard};
use crate::platform::PlatformService;
use std::sync::Arc;

enum RegistrarState {
    /// Not mounted; no listener attached.
    Idle,
    /// Mounted; one keydown listener attached through the guard.
    Listening {
        listener: ListenerGuard,
        compiled: usize,
    },
}

/// Shortcuts of one component instance.
///
/// Owns its configuration: changes the caller makes to its own copy after
/// [`define_shortcuts`] have no effect. Dropping a mounted registrar
/// detaches its listener, exactly like [`unmount`](Self::unmount).
pub struct ShortcutRegistrar {
    config: ShortcutsConfig,
    platform: PlatformService,
    document: Document,
    state: RegistrarState,
}

/// Define shortcuts for a component.
///
/// The returned registrar is idle; call [`ShortcutRegistrar::mount`] when the
/// component mounts and [`ShortcutRegistrar::unmount`] before it unmounts.
pub fn define_shortcuts(
    config: ShortcutsConfig,
    platform: &PlatformService,
    document: &Document,
) -> ShortcutRegistrar {
    ShortcutRegistrar {
        config,
        platform: platform.clone(),
        document: document.clone(),
        state: RegistrarState::Idle,
    }
}

impl ShortcutRegistrar {
    /// Compile the configuration and start listening for keydown events.
    ///
    /// Compilation runs before the listener is attached. Mounting an already
    /// mounted registrar does nothing.
    pub fn mount(&mut self) {
        if self.is_listening() {
            log::debug!("Shortcuts already mounted, ignoring mount");
            return;
        }

        let registry = Arc::new(compile_shortcuts(&self.config, &self.platform));
        let compiled = registry.len();
        let listener = self.document.listen(move |event| {
            dispatch(&registry, event);
        });

        log::info!(
            "Mounted {} shortcuts ({} configured) as listener {:?}",
            compiled,
            self.config.len(),
            listener.id()
        );
        self.state = RegistrarState::Listening {
            listener,
            compiled,
        };
    }

    /// Stop listening and discard the compiled shortcuts.
    pub fn unmount(&mut self) {
        if let RegistrarState::Listening { listener, compiled } =
            std::mem::replace(&mut self.state, RegistrarState::Idle)
        {
            log::info!("Unmounted {} shortcuts from listener {:?}", compiled, listener.id());
        }
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, RegistrarState::Listening { .. })
    }

    /// Number of compiled shortcuts while mounted.
    pub fn compiled_len(&self) -> Option<usize> {
        match self.state {
            RegistrarState::Listening { compiled, .. } => Some(compiled),
            RegistrarState::Idle => None,
        }
    }
}

impl std::fmt::Debug for ShortcutRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutRegistrar")
            .field("configured", &self.config.len())
            .field("compiled", &self.compiled_len())
            .finish()
    }
}
