//! Configuration constants
//!
//! The timer has no runtime configuration. Everything tunable is a
//! compile-time constant grouped here.

pub mod device;
pub mod timing;

pub use device::*;
pub use timing::*;
