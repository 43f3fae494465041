//! Demo configuration

use super::hardware::SegLcdPins;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flash timing shared by both flash modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlashConfig {
    /// Toggle interval (ms)
    pub interval_ms: u16,
    /// Cycles for the single-digit flash
    pub digit_repeat: u16,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            interval_ms: 300,
            digit_repeat: 3,
        }
    }
}

/// Complete demo configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemoConfig {
    /// COM/SEG pin mapping
    pub pins: SegLcdPins,
    /// Flash timing
    pub flash: FlashConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.pins, SegLcdPins::DEFAULT);
        assert_eq!(config.flash.interval_ms, 300);
        assert_eq!(config.flash.digit_repeat, 3);
    }
}
