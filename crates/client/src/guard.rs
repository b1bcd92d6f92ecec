//! Unsaved-changes guard.
//!
//! The form arms the guard when an edit is waiting to be saved and disarms
//! it when the save fires. Front ends consult it before leaving.

use std::sync::atomic::{AtomicBool, Ordering};

pub trait NavigationGuard: Send + Sync {
    fn set_dirty(&self, dirty: bool);

    fn is_dirty(&self) -> bool;
}

/// A [`NavigationGuard`] that is just a flag.
#[derive(Debug, Default)]
pub struct DirtyFlag {
    dirty: AtomicBool,
}

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NavigationGuard for DirtyFlag {
    fn set_dirty(&self, dirty: bool) {
        let was = self.dirty.swap(dirty, Ordering::SeqCst);
        if was != dirty {
            tracing::debug!(dirty, "Navigation guard changed");
        }
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }
}
