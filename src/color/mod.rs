mod gamma;
mod pipeline;

pub use gamma::{DEFAULT_GAMMA, GAMMA_TABLE_MAX, GammaTable};
pub use pipeline::{ColorPipeline, ColorStrategy, DriveLevels, Slot, slot_order};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Fully dark color
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
