//! Top-level control loop.
//!
//! One [`Controller::poll`] call drains the control channel, handles at most
//! one debounced button press, times out the backlight and runs one
//! scheduler tick. The caller sleeps for the returned duration.

use embassy_time::Instant;
use embedded_storage::Storage;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedDriver;
use crate::button::{ButtonReadings, Debouncer};
use crate::config::{Configuration, ControllerConfig};
use crate::display::{Backlight, Display};
use crate::menu::{Menu, MenuAction, MenuContext};
use crate::protocol::{ControlCommand, ControlDecoder, upload_settings};
use crate::scheduler::{ModeScheduler, TickResult};
use crate::serial::ByteReader;
use crate::store::SettingsStore;

/// Hardware handed to the [`Controller`]
pub struct Peripherals<'a, D, L, S, W, const CONTROL_SIZE: usize, const STREAM_SIZE: usize> {
    /// PWM outputs of the strips
    pub driver: D,
    /// Front panel display
    pub display: L,
    /// Non-volatile settings storage
    pub storage: S,
    /// Outgoing side of the control channel
    pub upload: W,
    pub control: ByteReader<'a, CONTROL_SIZE>,
    pub stream: ByteReader<'a, STREAM_SIZE>,
}

/// Ambilight controller wiring every subsystem together
pub struct Controller<
    'a,
    D: LedDriver,
    L,
    S,
    W,
    const CHANNELS: usize,
    const CONTROL_SIZE: usize,
    const STREAM_SIZE: usize,
> {
    scheduler: ModeScheduler<'a, D, CHANNELS, STREAM_SIZE>,
    control: ControlDecoder<'a, CONTROL_SIZE>,
    store: SettingsStore<S>,
    upload: W,
    display: L,
    menu: Menu,
    buttons: Debouncer,
    backlight: Backlight,
}

impl<'a, D, L, S, W, const CHANNELS: usize, const CONTROL_SIZE: usize, const STREAM_SIZE: usize>
    Controller<'a, D, L, S, W, CHANNELS, CONTROL_SIZE, STREAM_SIZE>
where
    D: LedDriver,
    L: Display,
    S: Storage,
    W: embedded_io::Write,
{
    /// Load the stored settings and show the root menu screen.
    ///
    /// Unreadable storage falls back to the default configuration.
    pub fn new(
        peripherals: Peripherals<'a, D, L, S, W, CONTROL_SIZE, STREAM_SIZE>,
        settings: &ControllerConfig,
        now: Instant,
    ) -> Self {
        let Peripherals {
            driver,
            mut display,
            storage,
            upload,
            control,
            stream,
        } = peripherals;

        let mut store = SettingsStore::new(storage);
        let config = store.load().unwrap_or_else(|_error| {
            #[cfg(feature = "esp32-log")]
            println!("[Controller.new] failed to load settings: {:?}", _error);

            Configuration::default()
        });

        let menu = Menu::new();
        display.set_backlight(true);
        menu.show(&config, &mut display);

        Self {
            scheduler: ModeScheduler::new(driver, stream, config, settings, now),
            control: ControlDecoder::new(control),
            store,
            upload,
            display,
            menu,
            buttons: Debouncer::new(settings.debounce, now),
            backlight: Backlight::new(settings.backlight_timeout, now),
        }
    }

    pub const fn config(&self) -> &Configuration {
        self.scheduler.config()
    }

    pub const fn scheduler(&self) -> &ModeScheduler<'a, D, CHANNELS, STREAM_SIZE> {
        &self.scheduler
    }

    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    pub const fn display(&self) -> &L {
        &self.display
    }

    pub const fn backlight(&self) -> &Backlight {
        &self.backlight
    }

    pub const fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    pub const fn upload(&self) -> &W {
        &self.upload
    }

    /// Run one iteration of the control loop
    ///
    /// Control bytes and button presses wait until the startup animation
    /// has finished.
    pub fn poll(&mut self, now: Instant, readings: ButtonReadings) -> TickResult {
        if !self.scheduler.is_starting() {
            self.handle_input(now, readings);
        }

        self.backlight.expire(&mut self.display, now);

        self.scheduler.tick(now)
    }

    fn handle_input(&mut self, now: Instant, readings: ButtonReadings) {
        while let Some(command) = self.control.poll() {
            self.apply(command, now);
        }

        let Some(button) = self.buttons.poll(now, readings) else {
            return;
        };
        if self.backlight.press(&mut self.display, now) {
            let mut context = PanelContext {
                scheduler: &mut self.scheduler,
                store: &mut self.store,
                now,
            };
            self.menu.handle(button, &mut context, &mut self.display);
        }
    }

    fn apply(&mut self, command: ControlCommand, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[Controller.apply] {:?}", command);

        match command {
            ControlCommand::SetMode(mode) => self.scheduler.set_mode(mode, now),
            ControlCommand::SetLightLevel(percent) => {
                self.scheduler.config_mut().set_light_level_percent(percent);
            }
            ControlCommand::SetRed(value) => self.scheduler.config_mut().color.r = value,
            ControlCommand::SetGreen(value) => self.scheduler.config_mut().color.g = value,
            ControlCommand::SetBlue(value) => self.scheduler.config_mut().color.b = value,
            ControlCommand::SaveSettings => save(&mut self.store, self.scheduler.config()),
            ControlCommand::UploadSettings => {
                if let Err(_error) = upload_settings(&mut self.upload, self.scheduler.config()) {
                    #[cfg(feature = "esp32-log")]
                    println!("[Controller.apply] failed to upload settings: {:?}", _error);
                }
            }
        }
    }
}

/// Menu access to the live configuration and the store
struct PanelContext<'c, 'a, D: LedDriver, S, const CHANNELS: usize, const STREAM_SIZE: usize> {
    scheduler: &'c mut ModeScheduler<'a, D, CHANNELS, STREAM_SIZE>,
    store: &'c mut SettingsStore<S>,
    now: Instant,
}

impl<D: LedDriver, S: Storage, const CHANNELS: usize, const STREAM_SIZE: usize> MenuContext
    for PanelContext<'_, '_, D, S, CHANNELS, STREAM_SIZE>
{
    fn config_mut(&mut self) -> &mut Configuration {
        self.scheduler.config_mut()
    }

    fn perform(&mut self, action: MenuAction) {
        match action {
            MenuAction::SetMode(mode) => self.scheduler.set_mode(mode, self.now),
            MenuAction::Save => save(self.store, self.scheduler.config()),
        }
    }
}

fn save<S: Storage>(store: &mut SettingsStore<S>, config: &Configuration) {
    if let Err(_error) = store.save(config) {
        #[cfg(feature = "esp32-log")]
        println!("[Controller.save] failed to save settings: {:?}", _error);
    }
}
