//! # RedLilium Engine Core
//!
//! Core crate for RedLilium Engine basic utilities: math aliases and
//! allocation-free object recycling.

pub mod math;
pub mod pool;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
