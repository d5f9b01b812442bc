//! User settings and controller tuning.

use embassy_time::Duration;

use crate::color::{ColorStrategy, DEFAULT_GAMMA, Rgb};
use crate::layout::StripLayout;

const MODE_ID_STREAMING: u8 = 10;
const MODE_ID_CONSTANT: u8 = 20;
const MODE_ID_OFF: u8 = 30;
const MODE_ID_DEMO: u8 = 40;

const MODE_NAME_STREAMING: &str = "Streaming";
const MODE_NAME_CONSTANT: &str = "Constant";
const MODE_NAME_OFF: &str = "Off";
const MODE_NAME_DEMO: &str = "Demo";
const MODE_NAME_UNKNOWN: &str = "Unknown";

/// Highest drive level of the PWM driver (12 bit)
pub const MAX_LIGHT_LEVEL: u16 = 4095;

/// Highest light level percentage
pub const MAX_LIGHT_LEVEL_PERCENT: u8 = 100;

/// Fade-out window for streamed colors
pub const DEFAULT_FADE_WINDOW: Duration = Duration::from_millis(4000);

/// Components at or above this value never fade
pub const DEFAULT_FADE_THRESHOLD: u8 = 50;

/// Streaming falls back to constant color after this long without frames
pub const DEFAULT_STREAM_TIMEOUT: Duration = Duration::from_millis(5000);

/// Pause after each commit in constant, off and demo modes
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(40);

/// Backlight switches off after this long without a button press
pub const DEFAULT_BACKLIGHT_TIMEOUT: Duration = Duration::from_millis(15_000);

pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_REPEAT_SHORTCUT: Duration = Duration::from_millis(100);

const DEFAULT_DEMO_SEED: u64 = 0x5EED_A3B1_1647_0F0F;

/// Render strategy selected by the user.
///
/// Any byte that is not a known mode id maps to [`Mode::Unknown`], which the
/// scheduler replaces with [`Mode::Streaming`] on its next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Streaming,
    Constant,
    Off,
    Demo,
    Unknown(u8),
}

impl Mode {
    pub const fn from_raw(value: u8) -> Self {
        match value {
            MODE_ID_STREAMING => Self::Streaming,
            MODE_ID_CONSTANT => Self::Constant,
            MODE_ID_OFF => Self::Off,
            MODE_ID_DEMO => Self::Demo,
            other => Self::Unknown(other),
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Streaming => MODE_ID_STREAMING,
            Self::Constant => MODE_ID_CONSTANT,
            Self::Off => MODE_ID_OFF,
            Self::Demo => MODE_ID_DEMO,
            Self::Unknown(raw) => raw,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Streaming => MODE_NAME_STREAMING,
            Self::Constant => MODE_NAME_CONSTANT,
            Self::Off => MODE_NAME_OFF,
            Self::Demo => MODE_NAME_DEMO,
            Self::Unknown(_) => MODE_NAME_UNKNOWN,
        }
    }
}

/// Settings the user controls through the control channel or the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub mode: Mode,
    light_level_percent: u8,
    light_level: u16,
    pub color: Rgb,
}

impl Configuration {
    pub const fn new(mode: Mode, light_level_percent: u8, color: Rgb) -> Self {
        let percent = clamp_percent(light_level_percent);
        Self {
            mode,
            light_level_percent: percent,
            light_level: percent_to_level(percent),
            color,
        }
    }

    /// Light level as a percentage (0-100)
    pub const fn light_level_percent(&self) -> u8 {
        self.light_level_percent
    }

    /// Light level as a driver value (0-4095)
    pub const fn light_level(&self) -> u16 {
        self.light_level
    }

    /// Set the light level percentage and recompute the driver level.
    ///
    /// Values above 100 are clamped.
    pub fn set_light_level_percent(&mut self, percent: u8) {
        self.light_level_percent = clamp_percent(percent);
        self.light_level = percent_to_level(self.light_level_percent);
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(
            Mode::Streaming,
            MAX_LIGHT_LEVEL_PERCENT,
            Rgb::new(255, 255, 255),
        )
    }
}

const fn clamp_percent(percent: u8) -> u8 {
    if percent > MAX_LIGHT_LEVEL_PERCENT {
        MAX_LIGHT_LEVEL_PERCENT
    } else {
        percent
    }
}

/// Convert a light level percentage into a driver level, rounding to nearest
#[allow(clippy::cast_possible_truncation)]
pub const fn percent_to_level(percent: u8) -> u16 {
    let scaled = percent as u32 * MAX_LIGHT_LEVEL as u32 + MAX_LIGHT_LEVEL_PERCENT as u32 / 2;
    (scaled / MAX_LIGHT_LEVEL_PERCENT as u32) as u16
}

/// What happens when the color stream loses byte alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Drop the single mismatched byte and check again on the next tick
    DropByte,
    /// Discard everything up to the next sync marker
    ScanForMarker,
}

/// Which channel's random walk the demo mode renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPalette {
    /// Every channel shows channel 0's color
    FirstChannel,
    /// Every channel shows its own color
    PerChannel,
}

/// Fade-out tuning
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    /// Time for a darkened component to reach its new value
    pub window: Duration,
    /// Only incoming values below this fade
    pub threshold: u8,
}

/// Button timing
#[derive(Debug, Clone, Copy)]
pub struct DebounceTimings {
    /// Minimum stable time before a reading is trusted
    pub window: Duration,
    /// Hold time before a held button repeats
    pub hold: Duration,
    /// How far the hold timer is wound back after each repeat
    pub repeat_shortcut: Duration,
}

/// Controller tuning and policies
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub layout: StripLayout,
    pub color_strategy: ColorStrategy,
    pub gamma: f32,
    pub fade: FadeConfig,
    /// `None` keeps streaming mode forever even without frames
    pub stream_timeout: Option<Duration>,
    pub settle_delay: Duration,
    pub sync_policy: SyncPolicy,
    pub demo_palette: DemoPalette,
    pub demo_seed: u64,
    pub startup_animation: bool,
    pub debounce: DebounceTimings,
    pub backlight_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            layout: StripLayout::default(),
            color_strategy: ColorStrategy::Corrected,
            gamma: DEFAULT_GAMMA,
            fade: FadeConfig {
                window: DEFAULT_FADE_WINDOW,
                threshold: DEFAULT_FADE_THRESHOLD,
            },
            stream_timeout: Some(DEFAULT_STREAM_TIMEOUT),
            settle_delay: DEFAULT_SETTLE_DELAY,
            sync_policy: SyncPolicy::DropByte,
            demo_palette: DemoPalette::FirstChannel,
            demo_seed: DEFAULT_DEMO_SEED,
            startup_animation: false,
            debounce: DebounceTimings {
                window: DEFAULT_DEBOUNCE_WINDOW,
                hold: DEFAULT_HOLD_DELAY,
                repeat_shortcut: DEFAULT_REPEAT_SHORTCUT,
            },
            backlight_timeout: DEFAULT_BACKLIGHT_TIMEOUT,
        }
    }
}
