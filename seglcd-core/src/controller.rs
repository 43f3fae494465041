//! Segment LCD demo controller
//!
//! The controller:
//! - Applies the pin mapping and boot content at startup
//! - Decodes DP writes delivered by the BLE stack
//! - Maps mode/content codes onto driver calls with fixed demo values
//! - Reports one status message per action
//!
//! Unknown DP IDs, unknown codes and short buffers are dropped without any
//! driver call or log output. No mode or content is remembered between
//! writes; the driver keeps whatever it was last told.

use core::marker::PhantomData;

use seglcd_protocol::{DisplayContent, DpCommand, DpError, Mode};

use crate::config::{ConfigError, DemoConfig};
use crate::status::StatusMessage;
use crate::traits::{
    Flash, FlashDigits, FlashEndCallback, FlashRepeat, FlashTransition, LogSink, SegLcdDriver,
    SegmentPattern, DIGIT_COUNT,
};

/// Number shown by the number demo
const DEMO_NUMBER: i32 = 12;

/// Fractional digits for the number demo
const DEMO_NUMBER_PRECISION: u8 = 1;

/// Text shown by the string demo
const DEMO_STRING: &str = "---";

/// Characters shown by the character demo, digit 0 first
const DEMO_CHARS: [char; DIGIT_COUNT as usize] = ['3', '2', '1'];

/// Glyph repeated on every digit by the custom character demo
const DEMO_GLYPH: SegmentPattern = SegmentPattern {
    a: false,
    b: false,
    c: true,
    d: false,
    e: true,
    f: false,
    g: true,
    dp: false,
};

/// Digit flashed by [`Mode::FlashDigit`]
const FLASH_DIGIT: u8 = 0;

/// Reports the end of a finite flash sequence
fn flash_end<L: LogSink>() {
    L::info(StatusMessage::FlashEnded);
}

/// Segment LCD demo driven by BLE DP writes
pub struct SegLcdDemo<D, L> {
    /// Segment LCD driver
    driver: D,
    /// Pin mapping and flash timing
    config: DemoConfig,
    _log: PhantomData<fn() -> L>,
}

impl<D: SegLcdDriver, L: LogSink> SegLcdDemo<D, L> {
    /// Create a new demo around a driver
    ///
    /// The pin mapping is trusted; use [`SegLcdDemo::try_new`] when it does
    /// not come from [`SegLcdPins::DEFAULT`](crate::config::SegLcdPins::DEFAULT).
    pub fn new(driver: D, config: DemoConfig) -> Self {
        Self {
            driver,
            config,
            _log: PhantomData,
        }
    }

    /// Create a new demo after checking the pin mapping
    pub fn try_new(driver: D, config: DemoConfig) -> Result<Self, ConfigError> {
        config.pins.validate()?;
        Ok(Self::new(driver, config))
    }

    /// Bring the display up: pins, show `0`, light on
    ///
    /// Meant to run once during startup.
    pub fn init(&mut self) {
        debug_assert!(
            self.config.pins.validate().is_ok(),
            "invalid segment LCD pin mapping"
        );
        self.driver.init(self.config.pins);
        self.driver.display_number(0, 0);
        self.driver.set_light(true);
    }

    /// Handle a DP write from the BLE stack
    ///
    /// Rejected writes are dropped silently.
    pub fn handle(&mut self, dp: &[u8]) {
        let _ = self.try_handle(dp);
    }

    /// Handle a DP write, returning the applied command or why it was dropped
    ///
    /// A rejected write causes no driver call and no log output.
    pub fn try_handle(&mut self, dp: &[u8]) -> Result<DpCommand, DpError> {
        let command = DpCommand::parse(dp)?;
        self.apply(command);
        Ok(command)
    }

    /// Apply an already decoded command
    pub fn apply(&mut self, command: DpCommand) {
        match command {
            DpCommand::SetMode(mode) => self.set_mode(mode),
            DpCommand::SetDisplay(content) => self.set_display(content),
        }
    }

    /// Apply a raw mode code, ignoring unknown values
    pub fn set_mode_code(&mut self, code: u8) {
        if let Some(mode) = Mode::from_byte(code) {
            self.set_mode(mode);
        }
    }

    /// Apply a raw display code, ignoring unknown values
    pub fn set_display_code(&mut self, code: u8) {
        if let Some(content) = DisplayContent::from_byte(code) {
            self.set_display(content);
        }
    }

    /// Switch lighting or arm a flash sequence
    pub fn set_mode(&mut self, mode: Mode) {
        match mode {
            Mode::LightOn => {
                self.driver.set_light(true);
                L::info(StatusMessage::LightOn);
            }
            Mode::LightOff => {
                self.driver.set_light(false);
                L::info(StatusMessage::LightOff);
            }
            Mode::Flash => {
                self.driver.set_flash(Flash {
                    digits: FlashDigits::All,
                    transition: FlashTransition::StartOnEndOn,
                    interval_ms: self.config.flash.interval_ms,
                    repeat: FlashRepeat::Forever,
                    on_end: None,
                });
                L::info(StatusMessage::Flashing);
            }
            Mode::FlashDigit => {
                let on_end: FlashEndCallback = flash_end::<L>;
                self.driver.set_flash(Flash {
                    digits: FlashDigits::Digit(FLASH_DIGIT),
                    transition: FlashTransition::StartOnEndOn,
                    interval_ms: self.config.flash.interval_ms,
                    repeat: FlashRepeat::Times(self.config.flash.digit_repeat),
                    on_end: Some(on_end),
                });
                L::info(StatusMessage::DigitFlashing {
                    digit: FLASH_DIGIT,
                    times: self.config.flash.digit_repeat,
                });
            }
        }
    }

    /// Render one of the demo contents
    pub fn set_display(&mut self, content: DisplayContent) {
        match content {
            DisplayContent::Num => {
                self.driver
                    .display_number(DEMO_NUMBER, DEMO_NUMBER_PRECISION);
                L::info(StatusMessage::ShowNumber);
            }
            DisplayContent::String => {
                self.driver.display_string(DEMO_STRING);
                L::info(StatusMessage::ShowString);
            }
            DisplayContent::Char => {
                for (position, ch) in (0..DIGIT_COUNT).zip(DEMO_CHARS) {
                    self.driver.display_char(ch, position);
                }
                L::info(StatusMessage::ShowChar);
            }
            DisplayContent::CustomChar => {
                for position in 0..DIGIT_COUNT {
                    self.driver.display_custom_char(DEMO_GLYPH, position);
                }
                L::info(StatusMessage::ShowCustomChar);
            }
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Get the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the driver mutably
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give the driver back
    pub fn into_driver(self) -> D {
        self.driver
    }
}
