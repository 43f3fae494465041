//! Log sink trait
//!
//! The sink has no receiver so that state-free callbacks, such as the flash
//! end callback running on the driver's timer context, can report too.

use crate::status::StatusMessage;

/// Informational log output
pub trait LogSink {
    /// Emit one informational line
    fn info(message: StatusMessage);
}

/// Log sink backed by `defmt`
///
/// Filtering happens at build time through `DEFMT_LOG`. Board code picks it
/// as the demo's sink next to its own driver:
///
/// ```ignore
/// use seglcd_core::config::DemoConfig;
/// use seglcd_core::traits::DefmtLog;
/// use seglcd_core::SegLcdDemo;
///
/// // `BoardSegLcd` implements `SegLcdDriver` for the board's LCD peripheral
/// let mut demo: SegLcdDemo<BoardSegLcd, DefmtLog> =
///     SegLcdDemo::new(BoardSegLcd::new(), DemoConfig::default());
/// demo.init();
///
/// // From the BLE stack's DP write callback
/// demo.handle(dp_data);
/// ```
#[cfg(feature = "defmt")]
pub struct DefmtLog;

#[cfg(feature = "defmt")]
impl LogSink for DefmtLog {
    fn info(message: StatusMessage) {
        defmt::info!("{}", message);
    }
}

#[cfg(all(test, feature = "defmt"))]
mod tests {
    use super::*;

    fn assert_sink<L: LogSink>() {}

    #[test]
    fn test_defmt_log_is_a_sink() {
        assert_sink::<DefmtLog>();
    }
}
