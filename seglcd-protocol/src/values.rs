//! Parameter values carried by the segment LCD DPs

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lighting / flashing mode requested by the mode DP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Backlight on
    LightOn,
    /// Backlight off
    LightOff,
    /// Flash every digit until told otherwise
    Flash,
    /// Flash digit 0 a fixed number of times
    FlashDigit,
}

// Wire format values
const MODE_LIGHT_ON: u8 = 0x00;
const MODE_LIGHT_OFF: u8 = 0x01;
const MODE_FLASH: u8 = 0x02;
const MODE_FLASH_DIGIT: u8 = 0x03;

impl Mode {
    /// Parse a mode from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            MODE_LIGHT_ON => Some(Mode::LightOn),
            MODE_LIGHT_OFF => Some(Mode::LightOff),
            MODE_FLASH => Some(Mode::Flash),
            MODE_FLASH_DIGIT => Some(Mode::FlashDigit),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Mode::LightOn => MODE_LIGHT_ON,
            Mode::LightOff => MODE_LIGHT_OFF,
            Mode::Flash => MODE_FLASH,
            Mode::FlashDigit => MODE_FLASH_DIGIT,
        }
    }
}

/// Content requested by the display DP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayContent {
    /// A number with fractional precision
    Num,
    /// A text string
    String,
    /// Individual characters per position
    Char,
    /// A custom segment pattern per position
    CustomChar,
}

// Wire format values
const DISP_NUM: u8 = 0x00;
const DISP_STRING: u8 = 0x01;
const DISP_CHAR: u8 = 0x02;
const DISP_CUSTOM_CHAR: u8 = 0x03;

impl DisplayContent {
    /// Parse a content code from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            DISP_NUM => Some(DisplayContent::Num),
            DISP_STRING => Some(DisplayContent::String),
            DISP_CHAR => Some(DisplayContent::Char),
            DISP_CUSTOM_CHAR => Some(DisplayContent::CustomChar),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            DisplayContent::Num => DISP_NUM,
            DisplayContent::String => DISP_STRING,
            DisplayContent::Char => DISP_CHAR,
            DisplayContent::CustomChar => DISP_CUSTOM_CHAR,
        }
    }
}
