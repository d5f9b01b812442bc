//! Character display seam and backlight timeout.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Abstract character display
///
/// Implement this trait for the LCD used by the board.
pub trait Display {
    /// Clear the whole screen
    fn clear(&mut self);

    /// Print text starting at the given column and row
    fn print_at(&mut self, col: u8, row: u8, text: &str);

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool);
}

/// Backlight that switches off after a period without button presses
#[derive(Debug, Clone)]
pub struct Backlight {
    timeout: Duration,
    last_activity: Instant,
    lit: bool,
}

impl Backlight {
    /// Create a backlight that starts lit
    pub const fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            timeout,
            last_activity: now,
            lit: true,
        }
    }

    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    /// Register a button press.
    ///
    /// Returns `true` if the press should reach the menu, `false` if it only
    /// woke the backlight.
    pub fn press<D: Display>(&mut self, display: &mut D, now: Instant) -> bool {
        self.last_activity = now;
        if self.lit {
            return true;
        }

        #[cfg(feature = "esp32-log")]
        println!("[Backlight.press] waking backlight");

        self.lit = true;
        display.set_backlight(true);
        false
    }

    /// Switch the backlight off once the timeout has passed
    pub fn expire<D: Display>(&mut self, display: &mut D, now: Instant) {
        if self.lit && now.saturating_duration_since(self.last_activity) >= self.timeout {
            self.lit = false;
            display.set_backlight(false);
        }
    }
}
