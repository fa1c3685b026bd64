//! Persistent gizmo objects.
//!
//! A [`GizmoObject`] keeps a shape's parameters and its own resolved style
//! across ticks. While enabled, the scheduler re-renders it every tick.
//! Enabling and disabling never touch the stored data.
//!
//! The enabled set holds weak references: an object keeps rendering while
//! at least one of its handles is alive, and is pruned from the set once
//! the last handle is dropped. There is no explicit destroy.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::primitives::Primitive;
use crate::render::RenderContext;
use crate::shared::SharedState;
use crate::style::{Style, StyleOverride};
use crate::GizmoError;

/// Identity of a persistent object, unique within its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gizmo#{}", self.0)
    }
}

/// Type-erased view of an object the scheduler can render.
pub(crate) trait ScheduledObject: Send + Sync {
    fn render(&self, cx: &mut RenderContext<'_>) -> Result<(), GizmoError>;
}

/// Objects scheduled for per-tick rendering, in creation order.
pub(crate) struct EnabledSet {
    objects: BTreeMap<ObjectId, Weak<dyn ScheduledObject>>,
}

impl EnabledSet {
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, id: ObjectId, object: Weak<dyn ScheduledObject>) {
        self.objects.insert(id, object);
    }

    pub fn remove(&mut self, id: ObjectId) {
        self.objects.remove(&id);
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Upgrade every live entry, dropping entries whose objects are gone.
    pub fn live(&mut self) -> Vec<Arc<dyn ScheduledObject>> {
        let mut live = Vec::with_capacity(self.objects.len());
        self.objects.retain(|_, weak| match weak.upgrade() {
            Some(object) => {
                live.push(object);
                true
            }
            None => false,
        });
        live
    }

    /// Number of entries, including any not yet pruned.
    pub fn len(&self) -> usize {
        self.objects.len()
    }
}

struct ObjectState<P> {
    shape: P,
    style: Style,
}

struct ObjectCell<P> {
    state: Mutex<ObjectState<P>>,
}

impl<P: Primitive> ScheduledObject for ObjectCell<P> {
    fn render(&self, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let state = self.state.lock();
        state.shape.render(&state.style, cx)
    }
}

/// A reusable, stateful drawable.
///
/// Created disabled by [`Gizmos::create`](crate::Gizmos::create). Clones
/// share the same underlying object.
pub struct GizmoObject<P: Primitive> {
    id: ObjectId,
    cell: Arc<ObjectCell<P>>,
    shared: Arc<SharedState>,
}

impl<P: Primitive> GizmoObject<P> {
    pub(crate) fn new(shared: Arc<SharedState>, style: &StyleOverride, shape: P) -> Self {
        let style = shared.resolve(style);
        Self {
            id: shared.next_object_id(),
            cell: Arc::new(ObjectCell {
                state: Mutex::new(ObjectState { shape, style }),
            }),
            shared,
        }
    }

    /// This object's identity.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Schedule this object for rendering every tick.
    ///
    /// Idempotent: enabling twice still takes a single
    /// [`disable`](Self::disable) to stop.
    pub fn enable(&self) {
        let weak = Arc::downgrade(&self.cell);
        let weak: Weak<dyn ScheduledObject> = weak;
        self.shared.enabled().lock().insert(self.id, weak);
    }

    /// Stop rendering this object. Its data is kept.
    pub fn disable(&self) {
        self.shared.enabled().lock().remove(self.id);
    }

    /// Whether this object is in the enabled set.
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled().lock().contains(self.id)
    }

    /// Replace the stored shape parameters wholesale.
    pub fn update(&self, shape: P) {
        self.cell.state.lock().shape = shape;
    }

    /// A copy of the stored shape parameters.
    pub fn shape(&self) -> P {
        self.cell.state.lock().shape.clone()
    }

    /// Re-resolve `partial` against the current global style and store it.
    pub fn set_style(&self, partial: &StyleOverride) {
        let style = self.shared.resolve(partial);
        self.cell.state.lock().style = style;
    }

    /// A copy of this object's resolved style.
    pub fn style(&self) -> Style {
        self.cell.state.lock().style
    }
}

impl<P: Primitive> Clone for GizmoObject<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            cell: Arc::clone(&self.cell),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P: Primitive + fmt::Debug> fmt::Debug for GizmoObject<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.cell.state.lock();
        f.debug_struct("GizmoObject")
            .field("id", &self.id)
            .field("shape", &state.shape)
            .field("style", &state.style)
            .finish()
    }
}
