//! Button debouncing with hold-to-repeat.
//!
//! Pins are sampled once per loop iteration. A reading is trusted once it has
//! not changed for the debounce window. Among the trusted readings the last
//! pressed button in scan order wins, and a change of the winning button, or
//! holding it long enough, produces a press.

use embassy_time::Instant;
use embedded_hal::digital::InputPin;

use crate::config::DebounceTimings;

/// Front panel buttons, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Ok,
    Back,
}

impl Button {
    /// All buttons in scan order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Ok, Self::Back];

    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Ok => 2,
            Self::Back => 3,
        }
    }
}

/// Raw pressed/released samples, indexed in scan order
pub type ButtonReadings = [bool; 4];

#[derive(Debug, Clone, Copy)]
struct ButtonState {
    last_reading: bool,
    last_transition: Instant,
}

/// Debouncer for the four front panel buttons
#[derive(Debug, Clone)]
pub struct Debouncer {
    timings: DebounceTimings,
    states: [ButtonState; 4],
    active: Option<Button>,
    hold_since: Instant,
}

impl Debouncer {
    pub fn new(timings: DebounceTimings, now: Instant) -> Self {
        let state = ButtonState {
            last_reading: false,
            last_transition: now,
        };
        Self {
            timings,
            states: [state; 4],
            active: None,
            hold_since: now,
        }
    }

    /// Button currently considered pressed
    pub const fn active(&self) -> Option<Button> {
        self.active
    }

    /// Feed one sample of every pin.
    ///
    /// Returns the button to act on, if this poll produced a press.
    pub fn poll(&mut self, now: Instant, readings: ButtonReadings) -> Option<Button> {
        let mut active = None;
        for button in Button::ALL {
            let state = &mut self.states[button.index()];
            let reading = readings[button.index()];
            if reading != state.last_reading {
                state.last_reading = reading;
                state.last_transition = now;
            }

            let stable = now.saturating_duration_since(state.last_transition) > self.timings.window;
            if stable && state.last_reading {
                active = Some(button);
            }
        }

        if active != self.active {
            self.active = active;
            self.hold_since = now;
            return active;
        }

        let button = active?;
        if now.saturating_duration_since(self.hold_since) > self.timings.hold {
            self.hold_since = now
                .checked_sub(self.timings.repeat_shortcut)
                .unwrap_or(now);
            return Some(button);
        }
        None
    }
}

/// Four input pins read as [`ButtonReadings`]
pub struct ButtonPins<P> {
    pins: [P; 4],
    active_low: bool,
}

impl<P: InputPin> ButtonPins<P> {
    /// Create from pins in scan order (up, down, ok, back)
    pub const fn new(pins: [P; 4], active_low: bool) -> Self {
        Self { pins, active_low }
    }

    /// Sample every pin; a pin that fails to read counts as released
    pub fn read(&mut self) -> ButtonReadings {
        let mut readings = [false; 4];
        for (reading, pin) in readings.iter_mut().zip(self.pins.iter_mut()) {
            *reading = if self.active_low {
                pin.is_low().unwrap_or(false)
            } else {
                pin.is_high().unwrap_or(false)
            };
        }
        readings
    }
}
