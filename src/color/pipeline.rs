//! Logical color to physical drive levels.
//!
//! Each channel owns three consecutive driver outputs. The strips are wired
//! green first on every channel, but red and blue trade places between even
//! and odd channels.

use super::{GAMMA_TABLE_MAX, GammaTable, Rgb};
use crate::LedDriver;

/// Color component carried by a physical output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Red,
    Green,
    Blue,
}

const EVEN_CHANNEL_ORDER: [Slot; 3] = [Slot::Green, Slot::Blue, Slot::Red];
const ODD_CHANNEL_ORDER: [Slot; 3] = [Slot::Green, Slot::Red, Slot::Blue];

/// Wiring order of the three outputs of a channel
pub const fn slot_order(channel: usize) -> [Slot; 3] {
    if channel.is_multiple_of(2) {
        EVEN_CHANNEL_ORDER
    } else {
        ODD_CHANNEL_ORDER
    }
}

/// How components are mapped to drive levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStrategy {
    /// Proportional to the component value
    Linear,
    /// Gamma corrected through a lookup table
    Corrected,
}

/// Drive levels of one channel, in physical output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveLevels {
    /// Index of the first output of the channel
    pub first_output: usize,
    pub levels: [u16; 3],
}

impl DriveLevels {
    /// Iterate `(output, level)` pairs
    pub fn outputs(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.levels
            .iter()
            .enumerate()
            .map(|(offset, level)| (self.first_output + offset, *level))
    }
}

/// Maps logical colors to driver outputs using a fixed strategy
#[derive(Debug, Clone)]
pub struct ColorPipeline {
    strategy: ColorStrategy,
    gamma: GammaTable,
}

impl ColorPipeline {
    /// Create a pipeline, building the gamma table once
    pub fn new(strategy: ColorStrategy, gamma: f32) -> Self {
        Self {
            strategy,
            gamma: GammaTable::new(gamma),
        }
    }

    pub const fn strategy(&self) -> ColorStrategy {
        self.strategy
    }

    pub const fn gamma_table(&self) -> &GammaTable {
        &self.gamma
    }

    /// Compute the drive levels of a channel
    ///
    /// # Arguments
    /// * `channel` - Channel index in stream order
    /// * `max_level` - Level a full component maps to (0-4095)
    /// * `color` - Logical color
    pub fn levels(&self, channel: usize, max_level: u16, color: Rgb) -> DriveLevels {
        let order = slot_order(channel);
        let mut levels = [0u16; 3];
        for (level, slot) in levels.iter_mut().zip(order) {
            let component = match slot {
                Slot::Red => color.r,
                Slot::Green => color.g,
                Slot::Blue => color.b,
            };
            *level = self.component_level(component, max_level);
        }
        DriveLevels {
            first_output: channel * 3,
            levels,
        }
    }

    /// Stage a channel's color on the driver without committing
    pub fn write<D: LedDriver>(&self, driver: &mut D, channel: usize, max_level: u16, color: Rgb) {
        for (output, level) in self.levels(channel, max_level, color).outputs() {
            driver.set(output, level);
        }
    }

    fn component_level(&self, component: u8, max_level: u16) -> u16 {
        match self.strategy {
            ColorStrategy::Linear => rescale(u32::from(component), 255, max_level),
            ColorStrategy::Corrected => rescale(
                u32::from(self.gamma.get(component)),
                u32::from(GAMMA_TABLE_MAX),
                max_level,
            ),
        }
    }
}

/// Map `value` from `0..=from_max` into `0..=to_max`
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn rescale(value: u32, from_max: u32, to_max: u16) -> u16 {
    (value * to_max as u32 / from_max) as u16
}
