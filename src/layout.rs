use core::ops::Range;

/// Default number of strips on the left side of the screen
pub const DEFAULT_LEFT: u8 = 6;
/// Default number of strips along the top edge
pub const DEFAULT_TOP: u8 = 8;
/// Default number of strips on the right side of the screen
pub const DEFAULT_RIGHT: u8 = 6;

/// Physical arrangement of the strips around the screen.
///
/// Strips are numbered in stream order: left side first, then the top edge,
/// then the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    pub left: u8,
    pub top: u8,
    pub right: u8,
}

impl StripLayout {
    pub const fn new(left: u8, top: u8, right: u8) -> Self {
        Self { left, top, right }
    }

    /// Get the total number of channels
    pub const fn count(self) -> usize {
        self.left as usize + self.top as usize + self.right as usize
    }

    /// Channels of the left segment
    pub const fn left_range(self) -> Range<usize> {
        0..self.left as usize
    }

    /// Channels of the top segment
    pub const fn top_range(self) -> Range<usize> {
        let start = self.left as usize;
        start..start + self.top as usize
    }

    /// Channels of the right segment
    pub const fn right_range(self) -> Range<usize> {
        let start = self.left as usize + self.top as usize;
        start..start + self.right as usize
    }

    /// Length of a full color-stream frame, sync marker included
    pub const fn frame_len(self) -> usize {
        frame_len(self.count())
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::new(DEFAULT_LEFT, DEFAULT_TOP, DEFAULT_RIGHT)
    }
}

/// Length of a color-stream frame for the given channel count
pub const fn frame_len(channels: usize) -> usize {
    channels * 3 + 1
}

/// Suggested color-stream queue capacity, room for two frames of triplets
pub const fn stream_queue_len(channels: usize) -> usize {
    channels * 3 * 2
}
