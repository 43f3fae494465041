//! Configuration types
//!
//! Board-agnostic configuration structures, built once at startup and
//! handed to the demo controller by value.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
