//! Show/hide with deferred hiding for flicker-prone kinds.
//!
//! Most kinds hide immediately. Kinds that [defer their hide](crate::ResourceKind::defers_hide)
//! are parked in a buffer instead, each with its own countdown of `period`
//! calls to [`process_buffer`](VisibilityBuffer::process_buffer). A handle
//! hidden just before the first of those calls is hidden by the
//! `period`-th one, regardless of when other handles entered the buffer.
//! With the default period of 2 and one process per tick, a container
//! released at the start of tick N+1 stays on screen through tick N+1.

use std::collections::HashMap;

use crate::host::GizmoHost;
use crate::Handle;

/// Deferred-hide buffer with a per-handle countdown.
#[derive(Debug)]
pub struct VisibilityBuffer {
    deferred: HashMap<Handle, u32>,
    period: u32,
    processed: u64,
}

impl VisibilityBuffer {
    /// Create a buffer that hides a deferred handle on the `period`-th call
    /// to [`process_buffer`](Self::process_buffer) after it went in. A
    /// period of 0 is treated as 1.
    pub fn new(period: u32) -> Self {
        Self {
            deferred: HashMap::new(),
            period: period.max(1),
            processed: 0,
        }
    }

    /// Make `handle` visible now, cancelling any pending deferred hide.
    pub fn show(&mut self, host: &mut dyn GizmoHost, handle: Handle) {
        self.deferred.remove(&handle);
        host.set_visible(handle, true);
    }

    /// Hide `handle`, immediately or after its countdown depending on its kind.
    pub fn hide(&mut self, host: &mut dyn GizmoHost, handle: Handle) {
        if handle.kind().defers_hide() {
            self.deferred.insert(handle, self.period);
        } else {
            host.set_visible(handle, false);
        }
    }

    /// Count every pending handle down by one and hide those that reach zero.
    ///
    /// Called once per tick by the scheduler.
    pub fn process_buffer(&mut self, host: &mut dyn GizmoHost) {
        self.processed += 1;
        let mut expired = Vec::new();
        for (&handle, remaining) in self.deferred.iter_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                expired.push(handle);
            }
        }
        if !expired.is_empty() {
            log::trace!("hiding {} deferred gizmo resources", expired.len());
        }
        for handle in expired {
            self.deferred.remove(&handle);
            host.set_visible(handle, false);
        }
    }

    /// Hide every pending handle now.
    ///
    /// Called on deactivation so no object stays visible once ticks stop.
    pub fn safe_check_buffer(&mut self, host: &mut dyn GizmoHost) {
        if self.deferred.is_empty() {
            return;
        }
        log::trace!("flushing {} deferred gizmo resources", self.deferred.len());
        for (handle, _) in self.deferred.drain() {
            host.set_visible(handle, false);
        }
    }

    /// Whether `handle` is waiting for a deferred hide.
    pub fn is_pending(&self, handle: Handle) -> bool {
        self.deferred.contains_key(&handle)
    }

    /// Processes left before `handle` is hidden, if it is pending.
    pub fn remaining(&self, handle: Handle) -> Option<u32> {
        self.deferred.get(&handle).copied()
    }

    /// Number of handles waiting for a deferred hide.
    pub fn pending_count(&self) -> usize {
        self.deferred.len()
    }

    /// Number of times the buffer has been processed.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}

impl Default for VisibilityBuffer {
    fn default() -> Self {
        Self::new(2)
    }
}
