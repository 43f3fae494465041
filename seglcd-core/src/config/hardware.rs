//! Hardware configuration types
//!
//! Pin assignment for the segment LCD's common (COM) and segment (SEG)
//! electrodes.

use heapless::FnvIndexSet;
use seglcd_hal::gpio::{PinId, PA0, PA1, PB4, PB5, PC0, PC1, PC2, PC3, PC4, PD3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of COM electrodes on the panel
pub const COM_PIN_COUNT: usize = 4;

/// Number of SEG electrodes on the panel
pub const SEG_PIN_COUNT: usize = 6;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin does not exist on the board
    InvalidPin(PinId),
    /// Pin assigned to more than one electrode
    DuplicatePin(PinId),
}

/// Segment LCD pin mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegLcdPins {
    /// COM electrode pins, COM0 first
    pub com: [PinId; COM_PIN_COUNT],
    /// SEG electrode pins, SEG0 first
    pub seg: [PinId; SEG_PIN_COUNT],
}

impl SegLcdPins {
    /// Mapping of the demo board
    pub const DEFAULT: Self = Self {
        com: [PA1, PC2, PC3, PB4],
        seg: [PA0, PC0, PD3, PC1, PC4, PB5],
    };

    /// Create a pin mapping
    pub const fn new(com: [PinId; COM_PIN_COUNT], seg: [PinId; SEG_PIN_COUNT]) -> Self {
        Self { com, seg }
    }

    /// All pins, COM first then SEG
    pub fn iter(&self) -> impl Iterator<Item = &PinId> {
        self.com.iter().chain(self.seg.iter())
    }

    /// Check every pin exists and none is used twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: FnvIndexSet<PinId, 16> = FnvIndexSet::new();

        for &pin in self.iter() {
            if !pin.is_valid() {
                return Err(ConfigError::InvalidPin(pin));
            }
            // Capacity is above COM + SEG, insert only fails on duplicates
            match seen.insert(pin) {
                Ok(true) => {}
                _ => return Err(ConfigError::DuplicatePin(pin)),
            }
        }

        Ok(())
    }
}

impl Default for SegLcdPins {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seglcd_hal::gpio::Port;

    #[test]
    fn test_default_mapping_is_valid() {
        assert_eq!(SegLcdPins::DEFAULT.validate(), Ok(()));
        assert_eq!(SegLcdPins::default(), SegLcdPins::DEFAULT);
        assert_eq!(SegLcdPins::DEFAULT.iter().count(), 10);
    }

    #[test]
    fn test_default_mapping_order() {
        let pins = SegLcdPins::DEFAULT;
        assert_eq!(pins.com[0], PA1);
        assert_eq!(pins.com[3], PB4);
        assert_eq!(pins.seg[2], PD3);
        assert_eq!(pins.seg[5], PB5);
    }

    #[test]
    fn test_invalid_pin() {
        let bad = PinId::new(Port::E, 6);
        let mut pins = SegLcdPins::DEFAULT;
        pins.seg[4] = bad;
        assert_eq!(pins.validate(), Err(ConfigError::InvalidPin(bad)));
    }

    #[test]
    fn test_duplicate_pin() {
        let mut pins = SegLcdPins::DEFAULT;
        pins.seg[0] = PC2; // already COM1
        assert_eq!(pins.validate(), Err(ConfigError::DuplicatePin(PC2)));
    }
}
