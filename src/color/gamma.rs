/// Default gamma exponent for LED perceived brightness
pub const DEFAULT_GAMMA: f32 = 2.0;

/// Upper bound of a gamma table entry
pub const GAMMA_TABLE_MAX: u16 = 4096;

/// Lookup table mapping an 8-bit component to a 12-bit perceptual level.
///
/// Entry `i` is `round(4096 * ((i + 1) / 256) ^ gamma)`, so the table never
/// decreases and its last entry is exactly [`GAMMA_TABLE_MAX`].
#[derive(Debug, Clone)]
pub struct GammaTable {
    levels: [u16; 256],
}

impl GammaTable {
    /// Build the table for the given exponent
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(gamma: f32) -> Self {
        let mut levels = [0u16; 256];
        let full_scale = f32::from(GAMMA_TABLE_MAX);
        for (i, level) in levels.iter_mut().enumerate() {
            let base = (full_scale - 1.0) / 256.0 * (i as f32 + 1.0) / (full_scale - 1.0);
            let value = libm::roundf(full_scale * libm::powf(base, gamma));
            *level = value.clamp(0.0, full_scale) as u16;
        }
        Self { levels }
    }

    /// Look up the corrected level of a component
    #[inline]
    pub const fn get(&self, component: u8) -> u16 {
        self.levels[component as usize]
    }

    pub const fn levels(&self) -> &[u16; 256] {
        &self.levels
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA)
    }
}
