#![no_std]

pub mod button;
pub mod color;
pub mod config;
pub mod controller;
pub mod display;
pub mod fade;
pub mod layout;
pub mod menu;
pub mod protocol;
pub mod scheduler;
pub mod serial;
pub mod startup;
pub mod store;
pub mod strip;

pub use button::{Button, ButtonPins, ButtonReadings, Debouncer};
pub use color::{ColorPipeline, ColorStrategy, GammaTable, Rgb};
pub use config::{Configuration, ControllerConfig, Mode};
pub use controller::{Controller, Peripherals};
pub use display::{Backlight, Display};
pub use layout::StripLayout;
pub use menu::{Menu, MenuAction, MenuContext};
pub use protocol::{ControlCommand, ControlDecoder, StreamDecoder};
pub use scheduler::{ModeScheduler, TickResult};
pub use serial::{ByteQueue, ByteReader, ByteWriter, SendError};
pub use startup::StartupAnimation;
pub use store::{SettingsStore, StoreError};
pub use strip::ChannelState;

pub use embassy_time::{Duration, Instant};

/// Abstract PWM driver trait
///
/// Implement this trait for the PWM expanders of the board.
/// Output `channel * 3 + slot` drives one color of one strip.
pub trait LedDriver {
    /// Stage a level in `0..=4095` for one output
    fn set(&mut self, output: usize, level: u16);

    /// Push all staged levels to the hardware
    fn commit(&mut self);
}
