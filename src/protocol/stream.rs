#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::SYNC_MARKER;
use crate::color::{BLACK, Rgb};
use crate::config::SyncPolicy;
use crate::layout::frame_len;
use crate::serial::ByteReader;

/// Non-blocking decoder for color-stream frames
pub struct StreamDecoder<'a, const SIZE: usize> {
    reader: ByteReader<'a, SIZE>,
    policy: SyncPolicy,
}

impl<'a, const SIZE: usize> StreamDecoder<'a, SIZE> {
    pub const fn new(reader: ByteReader<'a, SIZE>, policy: SyncPolicy) -> Self {
        Self { reader, policy }
    }

    /// Check if a full frame worth of bytes is buffered
    pub fn is_ready<const CHANNELS: usize>(&self) -> bool {
        self.reader.available() >= frame_len(CHANNELS)
    }

    /// Decode the next frame, if one is fully buffered.
    ///
    /// Short buffers consume nothing. A leading byte that is not the sync
    /// marker is handled according to the [`SyncPolicy`].
    pub fn poll<const CHANNELS: usize>(&mut self) -> Option<[Rgb; CHANNELS]> {
        if self.policy == SyncPolicy::ScanForMarker {
            self.skip_to_marker();
        }

        if !self.is_ready::<CHANNELS>() {
            return None;
        }

        let marker = self.reader.read()?;
        if marker != SYNC_MARKER {
            #[cfg(feature = "esp32-log")]
            println!("[StreamDecoder.poll] dropping out-of-sync byte {}", marker);
            return None;
        }

        let mut frame = [BLACK; CHANNELS];
        let mut triplet = [0u8; 3];
        for color in &mut frame {
            if !self.reader.read_exact(&mut triplet) {
                return None;
            }
            *color = Rgb::new(triplet[0], triplet[1], triplet[2]);
        }
        Some(frame)
    }

    fn skip_to_marker(&mut self) {
        while let Some(byte) = self.reader.peek() {
            if byte == SYNC_MARKER {
                return;
            }
            let _ = self.reader.read();
            #[cfg(feature = "esp32-log")]
            println!("[StreamDecoder.skip_to_marker] dropping byte {}", byte);
        }
    }
}
