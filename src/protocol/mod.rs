//! Wire protocols of the two inbound serial channels.
//!
//! The control channel carries `(command, value)` byte pairs from the phone
//! app. The color stream carries full frames: a sync marker followed by one
//! `(r, g, b)` triplet per channel in strip order.

mod control;
mod stream;

pub use control::{ControlCommand, ControlDecoder, UploadError, encode_settings, upload_settings};
pub use stream::StreamDecoder;

pub const MODE: u8 = 1;
pub const SAVE_SETTINGS: u8 = 5;
pub const LIGHT_LEVEL: u8 = 10;
pub const RED_COLOR: u8 = 20;
pub const GREEN_COLOR: u8 = 21;
pub const BLUE_COLOR: u8 = 22;
pub const UPLOAD_SETTINGS: u8 = 200;

/// First byte of every color-stream frame
pub const SYNC_MARKER: u8 = 0xFF;

/// Length of an encoded settings upload
pub const SETTINGS_UPLOAD_LEN: usize = 10;
