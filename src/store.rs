//! Persisted settings area.
//!
//! Settings live in five consecutive bytes of non-volatile storage, read once
//! at boot and written only on an explicit save.

use bytemuck::{Pod, Zeroable};
use embedded_storage::Storage;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::config::{Configuration, Mode};

pub const MODE_ADDR: u32 = 1;
pub const LIGHT_LEVEL_ADDR: u32 = 2;
pub const RED_COLOR_ADDR: u32 = 3;
pub const GREEN_COLOR_ADDR: u32 = 4;
pub const BLUE_COLOR_ADDR: u32 = 5;

/// Error type for the settings storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    Read,
    Write,
}

/// On-storage layout, one byte per slot starting at [`MODE_ADDR`]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct PersistentSettings {
    mode: u8,
    light_level_percent: u8,
    red: u8,
    green: u8,
    blue: u8,
}

impl From<&Configuration> for PersistentSettings {
    fn from(config: &Configuration) -> Self {
        Self {
            mode: config.mode.as_raw(),
            light_level_percent: config.light_level_percent(),
            red: config.color.r,
            green: config.color.g,
            blue: config.color.b,
        }
    }
}

impl From<PersistentSettings> for Configuration {
    fn from(settings: PersistentSettings) -> Self {
        Configuration::new(
            Mode::from_raw(settings.mode),
            settings.light_level_percent,
            Rgb::new(settings.red, settings.green, settings.blue),
        )
    }
}

const SETTINGS_LEN: usize = core::mem::size_of::<PersistentSettings>();

/// Load-all / save-all access to the persisted settings
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: Storage> SettingsStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the configuration from storage
    pub fn load(&mut self) -> Result<Configuration, StoreError> {
        let mut bytes = [0u8; SETTINGS_LEN];
        self.storage
            .read(MODE_ADDR, &mut bytes)
            .map_err(|_| StoreError::Read)?;
        let settings: PersistentSettings = bytemuck::pod_read_unaligned(&bytes);

        #[cfg(feature = "esp32-log")]
        println!("[SettingsStore.load] loaded {:?}", settings);

        Ok(settings.into())
    }

    /// Write the configuration to storage
    pub fn save(&mut self, config: &Configuration) -> Result<(), StoreError> {
        let settings = PersistentSettings::from(config);

        #[cfg(feature = "esp32-log")]
        println!("[SettingsStore.save] saving {:?}", settings);

        self.storage
            .write(MODE_ADDR, bytemuck::bytes_of(&settings))
            .map_err(|_| StoreError::Write)
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}
