//! External collaborator traits
//!
//! These traits define the interface between the demo logic and the
//! segment LCD driver / logging backend it runs on.

pub mod log;
pub mod seg_lcd;

#[cfg(feature = "defmt")]
pub use log::DefmtLog;
pub use log::LogSink;
pub use seg_lcd::{
    Flash, FlashDigits, FlashEndCallback, FlashRepeat, FlashTransition, SegLcdDriver,
    SegmentPattern, DIGIT_COUNT,
};
