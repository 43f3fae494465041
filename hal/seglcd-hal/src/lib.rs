//! Segment LCD Hardware Abstraction Layer
//!
//! Board-level pin identifiers shared by the segment LCD demo crates. The
//! segment LCD driver itself lives outside this workspace; it only needs to
//! know which GPIOs carry the common and segment electrodes.
//!
//! # Pin naming
//!
//! ```text
//! ┌──────┬──────────────┐
//! │ Port │ Valid pins   │
//! ├──────┼──────────────┤
//! │ A-D  │ 0-7          │
//! │ E    │ 0-3          │
//! └──────┴──────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod gpio;

pub use gpio::{PinId, Port};
