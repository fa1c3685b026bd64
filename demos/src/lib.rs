//! # RedLilium Engine Demos
//!
//! Demo scenes showcasing RedLilium Engine capabilities.
//!
//! ## Available Demos
//!
//! - `gizmo_demo` - Persistent and one-shot gizmos against the headless host

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
