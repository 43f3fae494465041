//! Board-agnostic logic for the segment LCD BLE demo
//!
//! This crate contains everything that does not depend on a specific
//! segment LCD driver or BLE stack:
//!
//! - Driver and log sink traits (the external collaborators)
//! - Pin mapping and flash configuration
//! - The demo controller: display init and DP dispatch
//! - Status messages reported after each action

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod controller;
pub mod status;
pub mod traits;

pub use controller::SegLcdDemo;
pub use status::StatusMessage;
