//! Cooperative mode scheduler.
//!
//! Each tick runs exactly one render strategy, commits the driver at most
//! once and returns how long the caller should wait before the next tick.
//! Nothing here blocks: missing input simply makes the tick a no-op.

use embassy_time::{Duration, Instant};
use fastrand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedDriver;
use crate::color::{BLACK, ColorPipeline, Rgb};
use crate::config::{Configuration, ControllerConfig, DemoPalette, FadeConfig, Mode};
use crate::protocol::StreamDecoder;
use crate::serial::ByteReader;
use crate::startup::StartupAnimation;
use crate::strip::ChannelState;

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the driver was committed during this tick
    pub committed: bool,
    /// How long to wait before the next tick
    pub sleep_duration: Duration,
}

impl TickResult {
    const IDLE: Self = Self {
        committed: false,
        sleep_duration: Duration::from_millis(0),
    };

    const fn committed(sleep_duration: Duration) -> Self {
        Self {
            committed: true,
            sleep_duration,
        }
    }
}

/// Mode scheduler owning the configuration and per-channel state
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = ModeScheduler::new(driver, stream_reader, config, &settings, now);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(millis()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct ModeScheduler<'a, D: LedDriver, const CHANNELS: usize, const STREAM_SIZE: usize> {
    // External dependencies
    driver: D,
    stream: StreamDecoder<'a, STREAM_SIZE>,

    // Policies
    pipeline: ColorPipeline,
    fade: FadeConfig,
    stream_timeout: Option<Duration>,
    settle_delay: Duration,
    demo_palette: DemoPalette,

    // State
    config: Configuration,
    channels: [ChannelState; CHANNELS],
    last_frame_at: Instant,
    startup: Option<StartupAnimation>,
    rng: Rng,
}

impl<'a, D: LedDriver, const CHANNELS: usize, const STREAM_SIZE: usize>
    ModeScheduler<'a, D, CHANNELS, STREAM_SIZE>
{
    /// Create a scheduler starting in the configured mode
    pub fn new(
        driver: D,
        stream: ByteReader<'a, STREAM_SIZE>,
        config: Configuration,
        settings: &ControllerConfig,
        now: Instant,
    ) -> Self {
        debug_assert_eq!(settings.layout.count(), CHANNELS);

        Self {
            driver,
            stream: StreamDecoder::new(stream, settings.sync_policy),
            pipeline: ColorPipeline::new(settings.color_strategy, settings.gamma),
            fade: settings.fade,
            stream_timeout: settings.stream_timeout,
            settle_delay: settings.settle_delay,
            demo_palette: settings.demo_palette,
            config,
            channels: [ChannelState::new(now); CHANNELS],
            last_frame_at: now,
            startup: settings
                .startup_animation
                .then(|| StartupAnimation::new(settings.layout)),
            rng: Rng::with_seed(settings.demo_seed),
        }
    }

    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub const fn mode(&self) -> Mode {
        self.config.mode
    }

    pub const fn channels(&self) -> &[ChannelState; CHANNELS] {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut [ChannelState; CHANNELS] {
        &mut self.channels
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub const fn pipeline(&self) -> &ColorPipeline {
        &self.pipeline
    }

    /// Check if the startup animation is still playing
    pub const fn is_starting(&self) -> bool {
        self.startup.is_some()
    }

    /// Switch mode immediately, bypassing automatic transitions
    pub fn set_mode(&mut self, mode: Mode, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[ModeScheduler.set_mode] {:?} -> {:?}", self.config.mode, mode);

        self.enter(mode, now);
    }

    /// Run one scheduler step
    pub fn tick(&mut self, now: Instant) -> TickResult {
        if let Some(result) = self.tick_startup() {
            return result;
        }

        match self.config.mode {
            Mode::Streaming => self.tick_streaming(now),
            Mode::Constant => self.tick_constant(now),
            Mode::Off => self.tick_off(),
            Mode::Demo => self.tick_demo(),
            Mode::Unknown(_raw) => {
                #[cfg(feature = "esp32-log")]
                println!("[ModeScheduler.tick] unknown mode {}, streaming", _raw);

                self.enter(Mode::Streaming, now);
                TickResult::IDLE
            }
        }
    }

    fn enter(&mut self, mode: Mode, now: Instant) {
        if mode == Mode::Streaming {
            self.last_frame_at = now;
        }
        self.config.mode = mode;
    }

    fn tick_startup(&mut self) -> Option<TickResult> {
        let animation = self.startup.as_mut()?;
        let pause = animation.advance(
            &mut self.driver,
            &self.pipeline,
            self.config.light_level(),
            self.config.color,
        );
        match pause {
            Some(pause) => Some(TickResult::committed(pause)),
            None => {
                self.startup = None;
                None
            }
        }
    }

    fn tick_streaming(&mut self, now: Instant) -> TickResult {
        let Some(frame) = self.stream.poll::<CHANNELS>() else {
            if let Some(timeout) = self.stream_timeout {
                if now.saturating_duration_since(self.last_frame_at) > timeout {
                    #[cfg(feature = "esp32-log")]
                    println!("[ModeScheduler.tick_streaming] no frames, constant color");

                    self.enter(Mode::Constant, now);
                }
            }
            return TickResult::IDLE;
        };

        let level = self.config.light_level();
        for (channel, (state, incoming)) in self.channels.iter_mut().zip(frame).enumerate() {
            let rendered = state.receive(incoming, now, &self.fade);
            self.pipeline.write(&mut self.driver, channel, level, rendered);
        }
        self.driver.commit();
        self.last_frame_at = now;

        TickResult::committed(Duration::from_millis(0))
    }

    fn tick_constant(&mut self, now: Instant) -> TickResult {
        self.fill(self.config.color);

        if self.stream.is_ready::<CHANNELS>() {
            #[cfg(feature = "esp32-log")]
            println!("[ModeScheduler.tick_constant] stream data, streaming");

            self.enter(Mode::Streaming, now);
        }
        TickResult::committed(self.settle_delay)
    }

    fn tick_off(&mut self) -> TickResult {
        self.fill(BLACK);
        TickResult::committed(self.settle_delay)
    }

    fn tick_demo(&mut self) -> TickResult {
        for state in &mut self.channels {
            state.advance_demo(&mut self.rng);
        }

        let level = self.config.light_level();
        let first = self.channels.first().map_or(BLACK, |state| state.value);
        for (channel, state) in self.channels.iter().enumerate() {
            let color = match self.demo_palette {
                DemoPalette::FirstChannel => first,
                DemoPalette::PerChannel => state.value,
            };
            self.pipeline.write(&mut self.driver, channel, level, color);
        }
        self.driver.commit();

        TickResult::committed(self.settle_delay)
    }

    fn fill(&mut self, color: Rgb) {
        let level = self.config.light_level();
        for channel in 0..CHANNELS {
            self.pipeline.write(&mut self.driver, channel, level, color);
        }
        self.driver.commit();
    }
}

