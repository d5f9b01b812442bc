#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{
    BLUE_COLOR, GREEN_COLOR, LIGHT_LEVEL, MODE, RED_COLOR, SAVE_SETTINGS, SETTINGS_UPLOAD_LEN,
    UPLOAD_SETTINGS,
};
use crate::config::{Configuration, Mode};
use crate::serial::ByteReader;

/// Command decoded from the control channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    SetMode(Mode),
    SetLightLevel(u8),
    SetRed(u8),
    SetGreen(u8),
    SetBlue(u8),
    SaveSettings,
    UploadSettings,
}

impl ControlCommand {
    /// Decode a command byte and its value
    ///
    /// Returns `None` for unknown command bytes.
    pub const fn decode(command: u8, value: u8) -> Option<Self> {
        Some(match command {
            MODE => Self::SetMode(Mode::from_raw(value)),
            SAVE_SETTINGS => Self::SaveSettings,
            LIGHT_LEVEL => Self::SetLightLevel(value),
            RED_COLOR => Self::SetRed(value),
            GREEN_COLOR => Self::SetGreen(value),
            BLUE_COLOR => Self::SetBlue(value),
            UPLOAD_SETTINGS => Self::UploadSettings,
            _ => return None,
        })
    }
}

/// Non-blocking decoder for the control channel
pub struct ControlDecoder<'a, const SIZE: usize> {
    reader: ByteReader<'a, SIZE>,
}

impl<'a, const SIZE: usize> ControlDecoder<'a, SIZE> {
    pub const fn new(reader: ByteReader<'a, SIZE>) -> Self {
        Self { reader }
    }

    /// Decode the next buffered command.
    ///
    /// Needs at least two buffered bytes. An unknown command byte is dropped
    /// alone, without consuming a value byte.
    pub fn poll(&mut self) -> Option<ControlCommand> {
        while self.reader.available() >= 2 {
            let command = self.reader.read()?;
            let value = self.reader.peek()?;
            if let Some(decoded) = ControlCommand::decode(command, value) {
                let _ = self.reader.read();
                return Some(decoded);
            }

            #[cfg(feature = "esp32-log")]
            println!("[ControlDecoder.poll] dropping unknown command {}", command);
        }
        None
    }
}

/// Error returned when the settings could not be sent back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadError;

/// Encode the configuration as control-channel pairs
pub const fn encode_settings(config: &Configuration) -> [u8; SETTINGS_UPLOAD_LEN] {
    [
        MODE,
        config.mode.as_raw(),
        LIGHT_LEVEL,
        config.light_level_percent(),
        RED_COLOR,
        config.color.r,
        GREEN_COLOR,
        config.color.g,
        BLUE_COLOR,
        config.color.b,
    ]
}

/// Send the configuration back to the control-channel peer
pub fn upload_settings<W: embedded_io::Write>(
    sink: &mut W,
    config: &Configuration,
) -> Result<(), UploadError> {
    sink.write_all(&encode_settings(config))
        .map_err(|_| UploadError)?;
    sink.flush().map_err(|_| UploadError)
}
