//! Resource pool: per-kind free lists of host renderables.
//!
//! The pool exclusively owns every [`Handle`]. Acquiring pops a free handle
//! or, on a miss, asks the host to create a new hidden object. Releasing
//! hides the handle through the [`VisibilityBuffer`] and pushes it back.
//! Nothing is ever destroyed, so the pool only grows to the peak number of
//! handles drawn in a single frame.

#[cfg(debug_assertions)]
use std::collections::HashSet;

use redlilium_core::pool::KindPool;

use crate::host::{GizmoHost, SceneRefs};
use crate::visibility::VisibilityBuffer;
use crate::{GizmoError, Handle, ResourceKind};

/// Free lists of pooled renderables, keyed by [`ResourceKind`].
#[derive(Debug, Default)]
pub struct ResourcePool {
    free: KindPool<ResourceKind, Handle>,
    next_id: u32,
    /// Mirror of `free` for double-release detection.
    #[cfg(debug_assertions)]
    free_set: HashSet<Handle>,
}

impl ResourcePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a handle of `kind`, creating a new host object on a miss.
    ///
    /// New objects are parented under `scene.container` and start hidden.
    pub fn acquire(
        &mut self,
        host: &mut dyn GizmoHost,
        scene: SceneRefs,
        kind: ResourceKind,
    ) -> Result<Handle, GizmoError> {
        if let Some(handle) = self.free.pop(kind) {
            #[cfg(debug_assertions)]
            self.free_set.remove(&handle);
            return Ok(handle);
        }

        let handle = Handle::new(kind, self.next_id);
        host.create_object(handle, scene)?;
        self.next_id += 1;
        log::debug!(
            "Gizmo pool grew: created {handle} ({} handles total)",
            self.next_id
        );
        Ok(handle)
    }

    /// Hide `handle` and return it to its free list.
    pub fn release(
        &mut self,
        host: &mut dyn GizmoHost,
        visibility: &mut VisibilityBuffer,
        handle: Handle,
    ) {
        visibility.hide(host, handle);
        self.push_free(handle);
    }

    /// Return a handle that was acquired but never shown.
    pub(crate) fn restore(&mut self, handle: Handle) {
        self.push_free(handle);
    }

    fn push_free(&mut self, handle: Handle) {
        #[cfg(debug_assertions)]
        assert!(self.free_set.insert(handle), "{handle} released twice");
        self.free.push(handle.kind(), handle);
    }

    /// Whether `handle` currently sits in a free list.
    pub fn is_free(&self, handle: Handle) -> bool {
        self.free.contains(handle.kind(), &handle)
    }

    /// Number of free handles of `kind`.
    pub fn free_count(&self, kind: ResourceKind) -> usize {
        self.free.free_count(kind)
    }

    /// Number of free handles across all kinds.
    pub fn total_free(&self) -> usize {
        self.free.total_free()
    }

    /// Number of handles ever created.
    pub fn created_count(&self) -> usize {
        self.next_id as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;

    fn setup() -> (HeadlessHost, SceneRefs) {
        let mut host = HeadlessHost::new();
        let scene = SceneRefs {
            container: host.ensure_container("c").unwrap(),
            anchor: host.ensure_anchor("a").unwrap(),
        };
        (host, scene)
    }

    #[test]
    fn test_acquire_creates_on_miss() {
        let (mut host, scene) = setup();
        let mut pool = ResourcePool::new();

        let h = pool.acquire(&mut host, scene, ResourceKind::Box).unwrap();
        assert_eq!(h.kind(), ResourceKind::Box);
        assert_eq!(host.created_count(ResourceKind::Box), 1);
        assert!(!host.is_visible(h));
        assert_eq!(pool.created_count(), 1);
    }

    #[test]
    fn test_reuse_creates_nothing() {
        let (mut host, scene) = setup();
        let mut pool = ResourcePool::new();
        let mut visibility = VisibilityBuffer::default();

        let handles: Vec<_> = (0..5)
            .map(|_| pool.acquire(&mut host, scene, ResourceKind::Line).unwrap())
            .collect();
        for &h in &handles {
            pool.release(&mut host, &mut visibility, h);
        }
        assert_eq!(pool.free_count(ResourceKind::Line), 5);

        let again: Vec<_> = (0..5)
            .map(|_| pool.acquire(&mut host, scene, ResourceKind::Line).unwrap())
            .collect();
        assert_eq!(host.created_count(ResourceKind::Line), 5);
        assert_eq!(pool.free_count(ResourceKind::Line), 0);

        let mut sorted = again.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
    }

    #[test]
    fn test_release_hides_and_frees() {
        let (mut host, scene) = setup();
        let mut pool = ResourcePool::new();
        let mut visibility = VisibilityBuffer::default();

        let h = pool.acquire(&mut host, scene, ResourceKind::Sphere).unwrap();
        visibility.show(&mut host, h);
        assert!(host.is_visible(h));

        pool.release(&mut host, &mut visibility, h);
        assert!(!host.is_visible(h));
        assert!(pool.is_free(h));
    }

    #[test]
    fn test_kinds_do_not_mix() {
        let (mut host, scene) = setup();
        let mut pool = ResourcePool::new();
        let mut visibility = VisibilityBuffer::default();

        let cone = pool.acquire(&mut host, scene, ResourceKind::Cone).unwrap();
        pool.release(&mut host, &mut visibility, cone);

        let cylinder = pool
            .acquire(&mut host, scene, ResourceKind::Cylinder)
            .unwrap();
        assert_ne!(cone, cylinder);
        assert_eq!(pool.free_count(ResourceKind::Cone), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "released twice")]
    fn test_double_release_panics_in_debug() {
        let (mut host, scene) = setup();
        let mut pool = ResourcePool::new();
        let mut visibility = VisibilityBuffer::default();

        let h = pool.acquire(&mut host, scene, ResourceKind::Line).unwrap();
        pool.release(&mut host, &mut visibility, h);
        pool.release(&mut host, &mut visibility, h);
    }

    #[test]
    fn test_reacquired_handle_can_be_released_again() {
        let (mut host, scene) = setup();
        let mut pool = ResourcePool::new();
        let mut visibility = VisibilityBuffer::default();

        let h = pool.acquire(&mut host, scene, ResourceKind::Line).unwrap();
        pool.release(&mut host, &mut visibility, h);
        let again = pool.acquire(&mut host, scene, ResourceKind::Line).unwrap();
        assert_eq!(again, h);
        pool.release(&mut host, &mut visibility, again);
        assert!(pool.is_free(h));
    }

    #[test]
    fn test_creation_failure_propagates() {
        let (host, scene) = setup();
        let mut host = host.with_creation_limit(0);
        let mut pool = ResourcePool::new();

        let err = pool
            .acquire(&mut host, scene, ResourceKind::Box)
            .unwrap_err();
        assert!(matches!(
            err,
            GizmoError::ResourceCreationFailed {
                kind: ResourceKind::Box,
                ..
            }
        ));
        assert_eq!(pool.created_count(), 0);
    }
}
