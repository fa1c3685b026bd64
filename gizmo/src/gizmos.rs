//! The gizmo context: activation controller, global style and draw entry
//! points.

use std::fmt;
use std::sync::Arc;

use crate::config::GizmoConfig;
use crate::host::{GizmoHost, SceneRefs};
use crate::object::GizmoObject;
use crate::pool::ResourcePool;
use crate::primitives::{Primitive, TextShape};
use crate::queue::RenderQueue;
use crate::render::RenderContext;
use crate::scheduler::FrameScheduler;
use crate::shared::SharedState;
use crate::style::{Style, StyleOverride};
use crate::visibility::VisibilityBuffer;
use crate::{GizmoError, Handle};
use redlilium_core::math::Vec3;

/// Counters describing the current state of a [`Gizmos`] context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GizmoStats {
    /// Handles ever created by the pool.
    pub created: usize,
    /// Handles sitting in the pool's free lists.
    pub free: usize,
    /// Handles submitted for the next frame.
    pub queued: usize,
    /// Handles shown by the parked frame.
    pub in_flight: usize,
    /// Handles waiting for a deferred hide.
    pub deferred: usize,
    /// Entries in the enabled set.
    pub enabled_objects: usize,
}

/// Immediate-mode and persistent gizmo drawing against a [`GizmoHost`].
///
/// The host calls [`tick`](Self::tick) once per frame. Drawing does nothing
/// until the context is [enabled](Self::enable).
pub struct Gizmos<H: GizmoHost> {
    host: H,
    config: GizmoConfig,
    scene: SceneRefs,
    shared: Arc<SharedState>,
    pool: ResourcePool,
    queue: RenderQueue,
    visibility: VisibilityBuffer,
    scheduler: FrameScheduler,
    last_switch: Option<bool>,
}

impl<H: GizmoHost> Gizmos<H> {
    /// Create a context, resolving the private container and the shared
    /// anchor on the host.
    ///
    /// Starts enabled if `config.start_active` is set or the host's
    /// activation switch is already on.
    pub fn new(mut host: H, config: GizmoConfig) -> Result<Self, GizmoError> {
        let scene = SceneRefs {
            container: host.ensure_container(&config.container_tag)?,
            anchor: host.ensure_anchor(&config.anchor_tag)?,
        };
        let last_switch = host.activation_switch();
        let start = config.start_active
            || (config.observe_activation_switch && last_switch == Some(true));

        let mut gizmos = Self {
            shared: Arc::new(SharedState::new(config.style)),
            visibility: VisibilityBuffer::new(config.visibility.deferred_hide_period),
            host,
            config,
            scene,
            pool: ResourcePool::new(),
            queue: RenderQueue::new(),
            scheduler: FrameScheduler::new(),
            last_switch,
        };
        log::info!(
            "Gizmos created (container '{}', anchor '{}')",
            gizmos.config.container_tag,
            gizmos.config.anchor_tag
        );
        if start {
            gizmos.enable();
        }
        Ok(gizmos)
    }

    /// Create a context with the default configuration.
    pub fn with_defaults(host: H) -> Result<Self, GizmoError> {
        Self::new(host, GizmoConfig::default())
    }

    // ---------------------------------------------------------------------
    // Activation
    // ---------------------------------------------------------------------

    /// Whether drawing is enabled.
    pub fn is_active(&self) -> bool {
        self.shared.is_active()
    }

    /// Enable drawing and attach the scheduler to the tick.
    pub fn enable(&mut self) {
        if self.is_active() {
            log::warn!("Gizmos::enable called while already active; ignoring");
            return;
        }
        self.shared.set_active(true);
        log::debug!("Gizmo scheduler attached");
        log::info!("Gizmos enabled");
    }

    /// Disable drawing, detach the scheduler and hide everything it showed.
    ///
    /// A parked frame is released on the spot, queued handles go back to
    /// the pool and the deferred-hide buffer is flushed.
    pub fn disable(&mut self) {
        if !self.is_active() {
            log::debug!("Gizmos::disable called while inactive");
            return;
        }
        self.shared.set_active(false);
        log::debug!("Gizmo scheduler detached");

        self.scheduler
            .cancel(&mut self.host, &mut self.pool, &mut self.visibility);
        let mut queued = Vec::new();
        self.queue.take_into(&mut queued);
        for handle in queued {
            self.pool
                .release(&mut self.host, &mut self.visibility, handle);
        }
        self.visibility.safe_check_buffer(&mut self.host);
        log::info!("Gizmos disabled");
    }

    /// Follow the host's activation switch if it changed since last seen.
    fn poll_activation_switch(&mut self) {
        if !self.config.observe_activation_switch {
            return;
        }
        let switch = self.host.activation_switch();
        if switch == self.last_switch {
            return;
        }
        self.last_switch = switch;
        match switch {
            Some(true) if !self.is_active() => self.enable(),
            Some(false) if self.is_active() => self.disable(),
            _ => {}
        }
    }

    // ---------------------------------------------------------------------
    // Tick
    // ---------------------------------------------------------------------

    /// Advance one host frame.
    ///
    /// Observes the activation switch, then, while active, finishes the
    /// previous frame and renders this one: enabled persistent objects are
    /// rendered, the queue is snapshotted and every snapshot handle shown.
    ///
    /// A persistent object that fails to render is skipped for this frame.
    /// The frame is still presented and the first such error is returned.
    pub fn tick(&mut self) -> Result<(), GizmoError> {
        self.poll_activation_switch();
        if !self.is_active() {
            return Ok(());
        }

        self.scheduler
            .resume(&mut self.host, &mut self.pool, &mut self.visibility);
        let rendered = self.render_enabled();
        self.scheduler
            .present(&mut self.host, &mut self.queue, &mut self.visibility);
        rendered
    }

    fn render_enabled(&mut self) -> Result<(), GizmoError> {
        let live = self.shared.enabled().lock().live();
        if live.is_empty() {
            return Ok(());
        }
        let mut cx = RenderContext::new(
            &mut self.host,
            &mut self.pool,
            &mut self.queue,
            self.scene,
            &self.config.render,
        );
        let mut first_error = None;
        for object in &live {
            if let Err(err) = object.render(&mut cx) {
                log::warn!("Persistent gizmo skipped this frame: {err}");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // ---------------------------------------------------------------------
    // Style
    // ---------------------------------------------------------------------

    /// A copy of the global style.
    pub fn style(&self) -> Style {
        self.shared.style()
    }

    /// Replace the global style.
    pub fn set_style(&self, style: Style) {
        self.shared.set_style(style);
    }

    /// Mutate the global style in place.
    ///
    /// ```ignore
    /// gizmos.edit_style(|s| s.color = Color3::RED);
    /// ```
    pub fn edit_style(&self, f: impl FnOnce(&mut Style)) {
        self.shared.edit_style(f);
    }

    /// Resolve `partial` against the global style.
    ///
    /// While inactive the global style is returned as is.
    pub fn resolve_style(&self, partial: &StyleOverride) -> Style {
        self.shared.resolve(partial)
    }

    // ---------------------------------------------------------------------
    // Drawing
    // ---------------------------------------------------------------------

    /// Draw `shape` for one frame with the global style.
    pub fn draw<P: Primitive>(&mut self, shape: P) -> Result<(), GizmoError> {
        self.draw_with_style(&StyleOverride::default(), shape)
    }

    /// Draw `shape` for one frame with `style` applied over the global style.
    ///
    /// A no-op while inactive.
    pub fn draw_with_style<P: Primitive>(
        &mut self,
        style: &StyleOverride,
        shape: P,
    ) -> Result<(), GizmoError> {
        if !self.is_active() {
            return Ok(());
        }
        let style = self.shared.resolve(style);
        let mut cx = RenderContext::new(
            &mut self.host,
            &mut self.pool,
            &mut self.queue,
            self.scene,
            &self.config.render,
        );
        shape.render(&style, &mut cx)
    }

    /// Draw a formatted text label for one frame.
    ///
    /// The template is checked before anything is acquired.
    pub fn draw_text(
        &mut self,
        position: Vec3,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), GizmoError> {
        if !self.is_active() {
            return Ok(());
        }
        self.draw(TextShape::formatted(position, template, args)?)
    }

    /// Create a disabled persistent object with the global style.
    pub fn create<P: Primitive>(&self, shape: P) -> GizmoObject<P> {
        self.create_with_style(&StyleOverride::default(), shape)
    }

    /// Create a disabled persistent object with `style` applied over the
    /// global style as it is now.
    pub fn create_with_style<P: Primitive>(
        &self,
        style: &StyleOverride,
        shape: P,
    ) -> GizmoObject<P> {
        GizmoObject::new(Arc::clone(&self.shared), style, shape)
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    /// Current counters.
    pub fn stats(&self) -> GizmoStats {
        GizmoStats {
            created: self.pool.created_count(),
            free: self.pool.total_free(),
            queued: self.queue.len(),
            in_flight: self.scheduler.in_flight().len(),
            deferred: self.visibility.pending_count(),
            enabled_objects: self.shared.enabled().lock().len(),
        }
    }

    /// The configuration this context was built with.
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// The resolved container and anchor.
    pub fn scene(&self) -> SceneRefs {
        self.scene
    }

    /// The resource pool.
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// The deferred-hide buffer.
    pub fn visibility(&self) -> &VisibilityBuffer {
        &self.visibility
    }

    /// Handles submitted for the next frame.
    pub fn queued(&self) -> &[Handle] {
        self.queue.as_slice()
    }

    /// Handles shown by the parked frame.
    pub fn in_flight(&self) -> &[Handle] {
        self.scheduler.in_flight()
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably. Handles owned by the pool must not be touched.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
