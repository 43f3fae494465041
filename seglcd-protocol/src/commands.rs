//! Commands decoded from DP writes
//!
//! Two DPs are recognised:
//! - 101: segment LCD mode, value is a [`Mode`] code
//! - 102: segment LCD content, value is a [`DisplayContent`] code

use crate::record::{DpError, DpRecord};
use crate::values::{DisplayContent, Mode};

// DP IDs
pub const DP_ID_SEG_LCD_MODE: u8 = 101;
pub const DP_ID_SEG_LCD_DISP: u8 = 102;

/// Commands parsed from a DP write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DpCommand {
    /// Change lighting / flashing mode
    SetMode(Mode),
    /// Change displayed content
    SetDisplay(DisplayContent),
}

impl DpCommand {
    /// Parse a command from a decoded record
    pub fn from_record(record: &DpRecord) -> Result<Self, DpError> {
        match record.id {
            DP_ID_SEG_LCD_MODE => Mode::from_byte(record.value)
                .map(DpCommand::SetMode)
                .ok_or(DpError::UnknownMode(record.value)),
            DP_ID_SEG_LCD_DISP => DisplayContent::from_byte(record.value)
                .map(DpCommand::SetDisplay)
                .ok_or(DpError::UnknownDisplay(record.value)),
            id => Err(DpError::UnknownId(id)),
        }
    }

    /// Parse a command straight from a DP write buffer
    pub fn parse(data: &[u8]) -> Result<Self, DpError> {
        let record = DpRecord::parse(data)?;
        Self::from_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_mode_command() {
        let cmd = DpCommand::parse(&[101, 0x04, 0x01, 0x02]).unwrap();
        assert_eq!(cmd, DpCommand::SetMode(Mode::Flash));
    }

    #[test]
    fn test_parse_display_command() {
        let cmd = DpCommand::parse(&[102, 0x04, 0x01, 0x00]).unwrap();
        assert_eq!(cmd, DpCommand::SetDisplay(DisplayContent::Num));
    }

    #[test]
    fn test_middle_bytes_ignored() {
        let a = DpCommand::parse(&[101, 0x00, 0x00, 0x03]).unwrap();
        let b = DpCommand::parse(&[101, 0xAB, 0xCD, 0x03]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(
            DpCommand::parse(&[100, 0x04, 0x01, 0x00]),
            Err(DpError::UnknownId(100))
        );
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(
            DpCommand::parse(&[101, 0x04, 0x01, 0x04]),
            Err(DpError::UnknownMode(0x04))
        );
        assert_eq!(
            DpCommand::parse(&[102, 0x04, 0x01, 0xFF]),
            Err(DpError::UnknownDisplay(0xFF))
        );
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(
            DpCommand::parse(&[101, 0x04]),
            Err(DpError::TooShort { len: 2 })
        );
    }

    proptest! {
        #[test]
        fn only_known_ids_and_codes_parse(id in any::<u8>(), value in any::<u8>(), filler in any::<[u8; 2]>()) {
            let result = DpCommand::parse(&[id, filler[0], filler[1], value]);
            let known_id = id == DP_ID_SEG_LCD_MODE || id == DP_ID_SEG_LCD_DISP;
            prop_assert_eq!(result.is_ok(), known_id && value <= 0x03);
            if let Ok(cmd) = result {
                let expected = if id == DP_ID_SEG_LCD_MODE {
                    DpCommand::SetMode(Mode::from_byte(value).unwrap())
                } else {
                    DpCommand::SetDisplay(DisplayContent::from_byte(value).unwrap())
                };
                prop_assert_eq!(cmd, expected);
            }
        }
    }
}
