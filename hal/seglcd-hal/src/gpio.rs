//! GPIO pin identifiers
//!
//! Pins are addressed by port letter and pin number, e.g. `PA1` or `PC4`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

impl Port {
    /// Number of pins wired out on this port
    pub const fn pin_count(self) -> u8 {
        match self {
            Port::A | Port::B | Port::C | Port::D => 8,
            Port::E => 4,
        }
    }

    /// Upper-case port letter
    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
        }
    }
}

/// A single GPIO pin on the target board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinId {
    /// Port the pin belongs to
    pub port: Port,
    /// Pin number within the port
    pub pin: u8,
}

impl PinId {
    /// Create a pin identifier
    ///
    /// No range check is done here; use [`PinId::is_valid`] when the value
    /// comes from outside.
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Check that the pin exists on its port
    pub const fn is_valid(&self) -> bool {
        self.pin < self.port.pin_count()
    }
}

impl core::fmt::Display for PinId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.pin)
    }
}

pub const PA0: PinId = PinId::new(Port::A, 0);
pub const PA1: PinId = PinId::new(Port::A, 1);
pub const PB4: PinId = PinId::new(Port::B, 4);
pub const PB5: PinId = PinId::new(Port::B, 5);
pub const PC0: PinId = PinId::new(Port::C, 0);
pub const PC1: PinId = PinId::new(Port::C, 1);
pub const PC2: PinId = PinId::new(Port::C, 2);
pub const PC3: PinId = PinId::new(Port::C, 3);
pub const PC4: PinId = PinId::new(Port::C, 4);
pub const PD3: PinId = PinId::new(Port::D, 3);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::string::ToString;

    #[test]
    fn test_pin_validity() {
        assert!(PA0.is_valid());
        assert!(PinId::new(Port::D, 7).is_valid());
        assert!(PinId::new(Port::E, 3).is_valid());
        assert!(!PinId::new(Port::E, 4).is_valid());
        assert!(!PinId::new(Port::A, 8).is_valid());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(PC2.to_string(), "PC2");
        assert_eq!(PinId::new(Port::E, 0).to_string(), "PE0");
    }

    proptest! {
        #[test]
        fn validity_follows_port_width(
            port in proptest::sample::select(&[Port::A, Port::B, Port::C, Port::D, Port::E][..]),
            pin in any::<u8>(),
        ) {
            let id = PinId::new(port, pin);
            prop_assert_eq!(id.is_valid(), pin < port.pin_count());
        }
    }
}
