use crate::Handle;

/// Handles enqueued for display during the current tick.
///
/// Not deduplicated: every enqueue appends. The scheduler drains the queue
/// once per tick with [`take_into`](Self::take_into), which swaps storage
/// with the caller's snapshot buffer so neither side reallocates once the
/// frame size is stable.
#[derive(Debug, Default)]
pub struct RenderQueue {
    handles: Vec<Handle>,
}

impl RenderQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append handles for display this tick.
    pub fn extend_from_slice(&mut self, handles: &[Handle]) {
        self.handles.extend_from_slice(handles);
    }

    /// Number of queued handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Queued handles in enqueue order.
    pub fn as_slice(&self) -> &[Handle] {
        &self.handles
    }

    /// Move the queued handles into `snapshot` and leave the queue empty.
    ///
    /// `snapshot` must be empty; its allocation becomes the new live queue.
    pub fn take_into(&mut self, snapshot: &mut Vec<Handle>) {
        debug_assert!(snapshot.is_empty(), "snapshot buffer not drained");
        snapshot.clear();
        std::mem::swap(&mut self.handles, snapshot);
    }
}
