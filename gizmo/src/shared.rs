use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::object::{EnabledSet, ObjectId};
use crate::style::{resolve_style, Style, StyleOverride};

/// State shared between a [`Gizmos`](crate::Gizmos) context and the
/// persistent objects it hands out.
pub(crate) struct SharedState {
    style: Mutex<Style>,
    active: AtomicBool,
    enabled: Mutex<EnabledSet>,
    next_object_id: AtomicU64,
}

impl SharedState {
    pub fn new(style: Style) -> Self {
        Self {
            style: Mutex::new(style),
            active: AtomicBool::new(false),
            enabled: Mutex::new(EnabledSet::new()),
            next_object_id: AtomicU64::new(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Release);
    }

    pub fn style(&self) -> Style {
        *self.style.lock()
    }

    pub fn set_style(&self, style: Style) {
        *self.style.lock() = style;
    }

    pub fn edit_style(&self, f: impl FnOnce(&mut Style)) {
        f(&mut self.style.lock());
    }

    /// Resolve `partial` against the global style as it is right now.
    pub fn resolve(&self, partial: &StyleOverride) -> Style {
        let global = self.style.lock();
        resolve_style(&global, self.is_active(), partial)
    }

    pub fn enabled(&self) -> &Mutex<EnabledSet> {
        &self.enabled
    }

    pub fn next_object_id(&self) -> ObjectId {
        ObjectId(self.next_object_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color3;

    #[test]
    fn test_resolution_is_late_bound() {
        let shared = SharedState::new(Style::default());
        shared.set_active(true);
        let partial = StyleOverride::new().with_layer(3);

        shared.edit_style(|s| s.color = Color3::YELLOW);
        let resolved = shared.resolve(&partial);
        assert_eq!(resolved.color, Color3::YELLOW);
        assert_eq!(resolved.layer, 3);
    }

    #[test]
    fn test_object_ids_are_unique() {
        let shared = SharedState::new(Style::default());
        assert_ne!(shared.next_object_id(), shared.next_object_id());
    }
}
