#![allow(dead_code)]

use core::convert::Infallible;

use ambilight_firmware::config::{ControllerConfig, SyncPolicy};
use ambilight_firmware::layout::StripLayout;
use ambilight_firmware::protocol::SYNC_MARKER;
use ambilight_firmware::{ColorStrategy, Display, LedDriver};

/// Driver recording every committed frame
pub struct MockDriver {
    pub staged: Vec<u16>,
    pub frames: Vec<Vec<u16>>,
}

impl MockDriver {
    pub fn new(channels: usize) -> Self {
        Self {
            staged: vec![0; channels * 3],
            frames: Vec::new(),
        }
    }

    pub fn commits(&self) -> usize {
        self.frames.len()
    }

    /// Outputs of one channel in the last committed frame
    pub fn channel(&self, channel: usize) -> [u16; 3] {
        let frame = self.frames.last().expect("no frame committed");
        let start = channel * 3;
        [frame[start], frame[start + 1], frame[start + 2]]
    }
}

impl LedDriver for MockDriver {
    fn set(&mut self, output: usize, level: u16) {
        if let Some(slot) = self.staged.get_mut(output) {
            *slot = level;
        }
    }

    fn commit(&mut self) {
        self.frames.push(self.staged.clone());
    }
}

/// Two line display keeping the last text of each row
#[derive(Default)]
pub struct MockDisplay {
    pub rows: [String; 2],
    pub backlight: bool,
    pub clears: usize,
}

impl Display for MockDisplay {
    fn clear(&mut self) {
        self.clears += 1;
        self.rows = [String::new(), String::new()];
    }

    fn print_at(&mut self, _col: u8, row: u8, text: &str) {
        if let Some(line) = self.rows.get_mut(usize::from(row)) {
            *line = text.to_string();
        }
    }

    fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
    }
}

#[derive(Debug)]
pub struct StorageFault;

/// Byte-addressed storage held in memory
pub struct MemStorage {
    pub bytes: Vec<u8>,
    pub fail: bool,
}

impl MemStorage {
    /// Storage holding the given settings bytes at offsets 1..=5
    pub fn with_settings(settings: [u8; 5]) -> Self {
        let mut bytes = vec![0; 16];
        bytes[1..6].copy_from_slice(&settings);
        Self { bytes, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            bytes: vec![0; 16],
            fail: true,
        }
    }

    pub fn settings(&self) -> &[u8] {
        &self.bytes[1..6]
    }
}

impl embedded_storage::ReadStorage for MemStorage {
    type Error = StorageFault;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        if self.fail || start + bytes.len() > self.bytes.len() {
            return Err(StorageFault);
        }
        bytes.copy_from_slice(&self.bytes[start..start + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

impl embedded_storage::Storage for MemStorage {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        if self.fail || start + bytes.len() > self.bytes.len() {
            return Err(StorageFault);
        }
        self.bytes[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

/// Upload sink collecting written bytes
#[derive(Default)]
pub struct VecSink {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl embedded_io::ErrorType for VecSink {
    type Error = Infallible;
}

impl embedded_io::Write for VecSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Upload sink whose peer is gone
pub struct BrokenSink;

impl embedded_io::ErrorType for BrokenSink {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(embedded_io::ErrorKind::BrokenPipe)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(embedded_io::ErrorKind::BrokenPipe)
    }
}

/// Input pin stuck at a level, or failing every read
pub struct MockPin {
    pub high: bool,
    pub fail: bool,
}

impl MockPin {
    pub fn at(high: bool) -> Self {
        Self { high, fail: false }
    }

    pub fn broken() -> Self {
        Self {
            high: true,
            fail: true,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = embedded_hal::digital::ErrorKind;
}

impl embedded_hal::digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(embedded_hal::digital::ErrorKind::Other);
        }
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Controller tuning for a small strip with linear color mapping
pub fn linear_settings(layout: StripLayout) -> ControllerConfig {
    ControllerConfig {
        layout,
        color_strategy: ColorStrategy::Linear,
        sync_policy: SyncPolicy::DropByte,
        ..ControllerConfig::default()
    }
}

/// Encode a color-stream frame
pub fn frame(colors: &[(u8, u8, u8)]) -> Vec<u8> {
    let mut bytes = vec![SYNC_MARKER];
    for (r, g, b) in colors {
        bytes.extend_from_slice(&[*r, *g, *b]);
    }
    bytes
}
