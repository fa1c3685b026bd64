use crate::config::RenderConfig;
use crate::host::{Appearance, Geometry, GizmoHost, SceneRefs};
use crate::pool::ResourcePool;
use crate::queue::RenderQueue;
use crate::style::Style;
use crate::{GizmoError, Handle, ResourceKind};

/// Everything a primitive renderer may touch while drawing.
///
/// Renderers acquire handles, configure them and submit them to the render
/// queue. They never show, hide or release; queue membership is the only
/// thing the scheduler looks at.
pub struct RenderContext<'a> {
    host: &'a mut dyn GizmoHost,
    pool: &'a mut ResourcePool,
    queue: &'a mut RenderQueue,
    scene: SceneRefs,
    config: &'a RenderConfig,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        host: &'a mut dyn GizmoHost,
        pool: &'a mut ResourcePool,
        queue: &'a mut RenderQueue,
        scene: SceneRefs,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            host,
            pool,
            queue,
            scene,
            config,
        }
    }

    /// Size constants for primitives.
    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// The shared container and anchor.
    pub fn scene(&self) -> SceneRefs {
        self.scene
    }

    /// Acquire one handle per entry of `kinds`, all before any is configured.
    ///
    /// If the host fails to create one of them, the handles already taken
    /// go back to the pool untouched and the error is returned.
    pub fn acquire<const N: usize>(
        &mut self,
        kinds: [ResourceKind; N],
    ) -> Result<[Handle; N], GizmoError> {
        let mut handles = kinds.map(|kind| Handle::new(kind, u32::MAX));
        for (i, kind) in kinds.into_iter().enumerate() {
            match self.pool.acquire(&mut *self.host, self.scene, kind) {
                Ok(handle) => handles[i] = handle,
                Err(e) => {
                    for &handle in &handles[..i] {
                        self.pool.restore(handle);
                    }
                    return Err(e);
                }
            }
        }
        Ok(handles)
    }

    /// Apply `style`'s visual fields and `geometry` to `handle`.
    pub fn configure(&mut self, handle: Handle, style: &Style, geometry: &Geometry) {
        debug_assert_eq!(
            handle.kind(),
            geometry.kind(),
            "geometry does not fit {handle}"
        );
        self.host
            .apply_appearance(handle, &Appearance::from(style));
        self.host.apply_geometry(handle, geometry);
    }

    /// Enqueue `handles` for display this tick.
    pub fn submit(&mut self, handles: &[Handle]) {
        self.queue.extend_from_slice(handles);
    }
}
