//! Headless host for testing and tooling.
//!
//! This host doesn't draw anything but keeps a faithful record of every
//! object the engine creates, its visibility, appearance and geometry, so
//! tests can assert on exactly what a real host would have displayed.

use std::collections::{HashMap, HashSet};

use crate::host::{Appearance, Geometry, GizmoHost, HostRef, SceneRefs};
use crate::{GizmoError, Handle, ResourceKind};

/// Recorded state of a single host object.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessObject {
    pub parent: HostRef,
    pub visible: bool,
    pub appearance: Option<Appearance>,
    pub geometry: Option<Geometry>,
}

/// A [`GizmoHost`] that records instead of rendering.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    tagged: HashMap<String, HostRef>,
    next_ref: u64,
    objects: HashMap<Handle, HeadlessObject>,
    created: HashMap<ResourceKind, usize>,
    creation_limit: Option<usize>,
    failing_kinds: HashSet<ResourceKind>,
    activation_switch: Option<bool>,
}

impl HeadlessHost {
    /// Create an empty headless host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the host name.
    pub fn name(&self) -> &'static str {
        "Headless Host"
    }

    /// Fail every object creation once `limit` objects exist.
    pub fn with_creation_limit(mut self, limit: usize) -> Self {
        self.creation_limit = Some(limit);
        self
    }

    /// Fail every creation of `kind`.
    pub fn with_failing_kind(mut self, kind: ResourceKind) -> Self {
        self.failing_kinds.insert(kind);
        self
    }

    /// Set the external activation switch (`None` removes it).
    pub fn set_activation_switch(&mut self, value: Option<bool>) {
        self.activation_switch = value;
    }

    /// Recorded state of `handle`, if the engine ever created it.
    pub fn object(&self, handle: Handle) -> Option<&HeadlessObject> {
        self.objects.get(&handle)
    }

    /// Whether `handle` is currently visible.
    pub fn is_visible(&self, handle: Handle) -> bool {
        self.objects.get(&handle).is_some_and(|o| o.visible)
    }

    /// Every currently visible handle, sorted.
    pub fn visible_handles(&self) -> Vec<Handle> {
        let mut handles: Vec<_> = self
            .objects
            .iter()
            .filter(|(_, o)| o.visible)
            .map(|(h, _)| *h)
            .collect();
        handles.sort();
        handles
    }

    /// Number of objects created of `kind`.
    pub fn created_count(&self, kind: ResourceKind) -> usize {
        self.created.get(&kind).copied().unwrap_or(0)
    }

    /// Number of objects created across all kinds.
    pub fn total_created(&self) -> usize {
        self.objects.len()
    }

    /// Look up a tagged container or anchor.
    pub fn tagged(&self, tag: &str) -> Option<HostRef> {
        self.tagged.get(tag).copied()
    }

    fn ensure_tagged(&mut self, tag: &str) -> HostRef {
        if let Some(existing) = self.tagged.get(tag) {
            return *existing;
        }
        self.next_ref += 1;
        let host_ref = HostRef(self.next_ref);
        log::trace!("HeadlessHost: creating tagged object {tag:?} as {host_ref:?}");
        self.tagged.insert(tag.to_string(), host_ref);
        host_ref
    }
}

impl GizmoHost for HeadlessHost {
    fn ensure_container(&mut self, tag: &str) -> Result<HostRef, GizmoError> {
        Ok(self.ensure_tagged(tag))
    }

    fn ensure_anchor(&mut self, tag: &str) -> Result<HostRef, GizmoError> {
        Ok(self.ensure_tagged(tag))
    }

    fn create_object(&mut self, handle: Handle, scene: SceneRefs) -> Result<(), GizmoError> {
        if self
            .creation_limit
            .is_some_and(|limit| self.objects.len() >= limit)
        {
            return Err(GizmoError::ResourceCreationFailed {
                kind: handle.kind(),
                message: "headless creation limit reached".to_string(),
            });
        }
        if self.failing_kinds.contains(&handle.kind()) {
            return Err(GizmoError::ResourceCreationFailed {
                kind: handle.kind(),
                message: "headless host cannot create this kind".to_string(),
            });
        }
        log::trace!("HeadlessHost: creating {handle}");
        self.objects.insert(
            handle,
            HeadlessObject {
                parent: scene.container,
                visible: false,
                appearance: None,
                geometry: None,
            },
        );
        *self.created.entry(handle.kind()).or_default() += 1;
        Ok(())
    }

    fn set_visible(&mut self, handle: Handle, visible: bool) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.visible = visible;
        }
    }

    fn apply_appearance(&mut self, handle: Handle, appearance: &Appearance) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.appearance = Some(*appearance);
        }
    }

    fn apply_geometry(&mut self, handle: Handle, geometry: &Geometry) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.geometry = Some(geometry.clone());
        }
    }

    fn activation_switch(&self) -> Option<bool> {
        self.activation_switch
    }
}
