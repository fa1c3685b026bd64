//! Per-kind free lists for recycling interchangeable objects.
//!
//! [`KindPool<K, T>`] keeps one LIFO stack of free values per kind key.
//! Values of the same kind are interchangeable, so the pool never cares
//! which one it hands out; it only guarantees that a value sits in at most
//! one free list at a time.
//!
//! # Motivation
//!
//! Frame-based drawing wants the same number of objects every frame. Creating
//! and destroying them each frame is expensive on most hosts, so instead they
//! are returned to a free list at the end of the frame and popped again at
//! the start of the next one. The stacks themselves retain their capacity,
//! so steady-state frames do not allocate.
//!
//! # Example
//!
//! ```
//! use redlilium_core::pool::KindPool;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Kind {
//!     Line,
//!     Box,
//! }
//!
//! let mut pool = KindPool::<Kind, u32>::new();
//! assert_eq!(pool.pop(Kind::Line), None); // miss: caller creates a new one
//!
//! pool.push(Kind::Line, 7);
//! pool.push(Kind::Box, 8);
//! assert_eq!(pool.free_count(Kind::Line), 1);
//!
//! assert_eq!(pool.pop(Kind::Line), Some(7));
//! assert_eq!(pool.pop(Kind::Line), None);
//! assert_eq!(pool.total_free(), 1);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Free lists of `T`, one stack per kind `K`.
#[derive(Debug)]
pub struct KindPool<K, T> {
    free: HashMap<K, Vec<T>>,
}

impl<K: Copy + Eq + Hash, T> KindPool<K, T> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            free: HashMap::new(),
        }
    }

    /// Pop a free value of `kind`, or `None` when that free list is empty.
    pub fn pop(&mut self, kind: K) -> Option<T> {
        self.free.get_mut(&kind).and_then(Vec::pop)
    }

    /// Return a value to the free list of `kind`.
    pub fn push(&mut self, kind: K, value: T) {
        self.free.entry(kind).or_default().push(value);
    }

    /// Number of free values of `kind`.
    pub fn free_count(&self, kind: K) -> usize {
        self.free.get(&kind).map_or(0, Vec::len)
    }

    /// Number of free values across all kinds.
    pub fn total_free(&self) -> usize {
        self.free.values().map(Vec::len).sum()
    }

    /// Iterate over the free values of `kind`, most recently pushed last.
    pub fn iter_free(&self, kind: K) -> impl Iterator<Item = &T> {
        self.free.get(&kind).into_iter().flatten()
    }
}

impl<K: Copy + Eq + Hash, T: PartialEq> KindPool<K, T> {
    /// Returns whether `value` currently sits in the free list of `kind`.
    pub fn contains(&self, kind: K, value: &T) -> bool {
        self.iter_free(kind).any(|v| v == value)
    }
}

impl<K: Copy + Eq + Hash, T> Default for KindPool<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
