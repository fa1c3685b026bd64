//! Frame scheduler.
//!
//! One frame runs across two ticks. During tick N the frame renders the
//! enabled persistent objects, snapshots the render queue, shows every
//! snapshot handle and parks. At the start of tick N+1 it resumes: every
//! snapshot handle goes back to the pool and the visibility buffer is
//! processed once. Only then does frame N+1 render.
//!
//! The queue is cleared at snapshot time, so draws made while a frame is
//! parked land in the next frame.

use crate::host::GizmoHost;
use crate::pool::ResourcePool;
use crate::queue::RenderQueue;
use crate::visibility::VisibilityBuffer;
use crate::Handle;

/// The parked half of a frame.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    in_flight: Vec<Handle>,
    parked: bool,
    frames: u64,
}

impl FrameScheduler {
    /// Create a scheduler with no parked frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the parked frame, if any: release its handles, then process
    /// the visibility buffer once.
    pub fn resume(
        &mut self,
        host: &mut dyn GizmoHost,
        pool: &mut ResourcePool,
        visibility: &mut VisibilityBuffer,
    ) {
        if !self.parked {
            return;
        }
        for handle in self.in_flight.drain(..) {
            pool.release(host, visibility, handle);
        }
        visibility.process_buffer(host);
        self.parked = false;
    }

    /// Snapshot and clear the queue, show the snapshot and park.
    pub fn present(
        &mut self,
        host: &mut dyn GizmoHost,
        queue: &mut RenderQueue,
        visibility: &mut VisibilityBuffer,
    ) {
        debug_assert!(!self.parked, "presented over a parked frame");
        queue.take_into(&mut self.in_flight);
        for &handle in &self.in_flight {
            visibility.show(host, handle);
        }
        self.parked = true;
        self.frames += 1;
        log::trace!(
            "Gizmo frame {} presented {} handles",
            self.frames,
            self.in_flight.len()
        );
    }

    /// Release the parked frame's handles without processing the buffer.
    ///
    /// Used when drawing is disabled; the caller flushes the buffer.
    pub fn cancel(
        &mut self,
        host: &mut dyn GizmoHost,
        pool: &mut ResourcePool,
        visibility: &mut VisibilityBuffer,
    ) {
        for handle in self.in_flight.drain(..) {
            pool.release(host, visibility, handle);
        }
        self.parked = false;
    }

    /// Whether a frame is parked.
    pub fn is_parked(&self) -> bool {
        self.parked
    }

    /// Handles shown by the parked frame.
    pub fn in_flight(&self) -> &[Handle] {
        &self.in_flight
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
