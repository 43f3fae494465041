//! Segment LCD driver trait
//!
//! The driver owns segment encoding, COM/SEG multiplexing and the flash
//! timer. Application code only selects what to show and how to blink.

use crate::config::SegLcdPins;

/// Digit positions driven by the demo panel
pub const DIGIT_COUNT: u8 = 3;

/// Lit/unlit state of each element of one digit
///
/// ```text
///  ─a─
/// f   b
///  ─g─
/// e   c
///  ─d─  .dp
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
    pub e: bool,
    pub f: bool,
    pub g: bool,
    pub dp: bool,
}

impl SegmentPattern {
    /// Pack into a byte, bit 0 = `a` ... bit 7 = `dp`
    pub fn to_bits(&self) -> u8 {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.dp,
        ]
        .iter()
        .enumerate()
        .fold(0, |bits, (i, &on)| bits | ((on as u8) << i))
    }

    /// Unpack from a byte, bit 0 = `a` ... bit 7 = `dp`
    pub fn from_bits(bits: u8) -> Self {
        let bit = |i: u8| bits & (1 << i) != 0;
        Self {
            a: bit(0),
            b: bit(1),
            c: bit(2),
            d: bit(3),
            e: bit(4),
            f: bit(5),
            g: bit(6),
            dp: bit(7),
        }
    }
}

/// Which digit positions take part in a flash sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashDigits {
    /// Every digit position
    All,
    /// A single digit position
    Digit(u8),
}

/// On/off state at the start and end of a flash sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashTransition {
    StartOnEndOn,
    StartOnEndOff,
    StartOffEndOn,
    StartOffEndOff,
}

/// How many on/off cycles to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashRepeat {
    /// Never stops on its own
    Forever,
    /// Stops after this many cycles
    Times(u16),
}

/// Called by the driver once a finite flash sequence ends
///
/// Runs on the driver's timer context.
pub type FlashEndCallback = fn();

/// A flash request handed to the driver
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub digits: FlashDigits,
    pub transition: FlashTransition,
    /// Time between on/off toggles (ms)
    pub interval_ms: u16,
    pub repeat: FlashRepeat,
    /// Only meaningful with [`FlashRepeat::Times`]
    pub on_end: Option<FlashEndCallback>,
}

/// Trait for segment LCD drivers
///
/// Calls are fire-and-forget: failures stay inside the driver.
pub trait SegLcdDriver {
    /// Configure COM/SEG pins and start multiplexing
    fn init(&mut self, pins: SegLcdPins);

    /// Show a number with `precision` fractional digits
    fn display_number(&mut self, value: i32, precision: u8);

    /// Show a string, left-aligned
    fn display_string(&mut self, text: &str);

    /// Show one character at a digit position
    fn display_char(&mut self, ch: char, position: u8);

    /// Show a raw segment pattern at a digit position
    fn display_custom_char(&mut self, pattern: SegmentPattern, position: u8);

    /// Switch the backlight
    fn set_light(&mut self, on: bool);

    /// Arm a flash sequence, replacing any running one
    fn set_flash(&mut self, flash: Flash);
}
