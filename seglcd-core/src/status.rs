//! Status messages reported after each display action

use core::fmt;

/// One informational log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    // Mode changes
    LightOn,
    LightOff,
    Flashing,
    /// Single digit flash armed with a finite repeat count
    DigitFlashing { digit: u8, times: u16 },
    /// Reported from the flash end callback
    FlashEnded,

    // Content changes
    ShowNumber,
    ShowString,
    ShowChar,
    ShowCustomChar,
}

impl StatusMessage {
    /// Check if this message follows a mode change
    pub fn is_mode_message(&self) -> bool {
        matches!(
            self,
            StatusMessage::LightOn
                | StatusMessage::LightOff
                | StatusMessage::Flashing
                | StatusMessage::DigitFlashing { .. }
                | StatusMessage::FlashEnded
        )
    }

    /// Fixed text of the message, `None` for messages carrying values
    fn fixed_text(&self) -> Option<&'static str> {
        match self {
            StatusMessage::LightOn => Some("Segment LCD is light on."),
            StatusMessage::LightOff => Some("Segment LCD is light off."),
            StatusMessage::Flashing => Some("Segment LCD is flashing."),
            StatusMessage::DigitFlashing { .. } => None,
            StatusMessage::FlashEnded => Some("Segment LCD flash ends."),
            StatusMessage::ShowNumber => Some("Segment LCD display number."),
            StatusMessage::ShowString => Some("Segment LCD display string."),
            StatusMessage::ShowChar => Some("Segment LCD display character."),
            StatusMessage::ShowCustomChar => Some("Segment LCD display custom character."),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.fixed_text()) {
            (StatusMessage::DigitFlashing { digit, times }, _) => {
                write!(f, "Segment LCD's digit {} will flash {} times.", digit, times)
            }
            (_, Some(text)) => f.write_str(text),
            (_, None) => Ok(()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusMessage {
    fn format(&self, f: defmt::Formatter) {
        match (self, self.fixed_text()) {
            (StatusMessage::DigitFlashing { digit, times }, _) => {
                defmt::write!(f, "Segment LCD's digit {} will flash {} times.", digit, times)
            }
            (_, Some(text)) => defmt::write!(f, "{=str}", text),
            (_, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_message_text() {
        assert_eq!(StatusMessage::FlashEnded.to_string(), "Segment LCD flash ends.");
        assert_eq!(
            StatusMessage::ShowCustomChar.to_string(),
            "Segment LCD display custom character."
        );
    }

    #[test]
    fn test_digit_flash_text_carries_count() {
        let message = StatusMessage::DigitFlashing { digit: 0, times: 3 };
        assert_eq!(
            message.to_string(),
            "Segment LCD's digit 0 will flash 3 times."
        );

        let message = StatusMessage::DigitFlashing { digit: 2, times: 7 };
        assert_eq!(
            message.to_string(),
            "Segment LCD's digit 2 will flash 7 times."
        );
    }

    #[test]
    fn test_mode_messages() {
        assert!(StatusMessage::Flashing.is_mode_message());
        assert!(StatusMessage::DigitFlashing { digit: 0, times: 3 }.is_mode_message());
        assert!(StatusMessage::FlashEnded.is_mode_message());
        assert!(!StatusMessage::ShowString.is_mode_message());
    }
}
