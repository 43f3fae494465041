//! BLE Data Point (DP) Protocol
//!
//! This crate decodes the DP writes that the BLE stack hands to the segment
//! LCD demo. Only the fields the demo acts on are interpreted.
//!
//! # Record layout
//!
//! ```text
//! ┌───────┬──────┬────────┬───────────┐
//! │ DP ID │ TYPE │ LENGTH │ VALUE     │
//! │ 1B    │ 1B   │ 1B     │ 1B (+...) │
//! └───────┴──────┴────────┴───────────┘
//! ```
//!
//! The ID selects the command, the first VALUE byte carries its parameter.
//! TYPE and LENGTH are carried through untouched; transport framing and
//! multi-record payloads belong to the BLE stack.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod commands;
pub mod record;
pub mod values;

pub use commands::{DpCommand, DP_ID_SEG_LCD_DISP, DP_ID_SEG_LCD_MODE};
pub use record::{DpError, DpRecord, DP_HEADER_LEN, DP_MIN_LEN};
pub use values::{DisplayContent, Mode};
