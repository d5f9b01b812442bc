//! Per-channel state shared by the streaming and demo modes.

use embassy_time::Instant;
use fastrand::Rng;

use crate::color::{BLACK, Rgb};
use crate::config::FadeConfig;
use crate::fade::fade_component;

/// One in this many demo ticks re-rolls a direction component
const DEMO_REROLL_ODDS: u8 = 20;

/// Per-component step of the demo random walk (-1, 0 or 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub r: i8,
    pub g: i8,
    pub b: i8,
}

impl Direction {
    pub const RISING: Self = Self { r: 1, g: 1, b: 1 };
    pub const STILL: Self = Self { r: 0, g: 0, b: 0 };
}

/// State of one physical channel
#[derive(Debug, Clone, Copy)]
pub struct ChannelState {
    /// Demo walk position, or the anchored streamed color
    pub value: Rgb,
    /// Demo walk direction
    pub direction: Direction,
    /// Time each streamed component (r, g, b) was anchored
    pub last_modified: [Instant; 3],
}

impl ChannelState {
    pub const fn new(now: Instant) -> Self {
        Self {
            value: BLACK,
            direction: Direction::RISING,
            last_modified: [now; 3],
        }
    }

    /// Accept a streamed color and return the color to render.
    ///
    /// A component that keeps decaying keeps its anchor. A component that
    /// takes the incoming value is re-anchored at `now`.
    pub fn receive(&mut self, incoming: Rgb, now: Instant, fade: &FadeConfig) -> Rgb {
        let [since_r, since_g, since_b] = &mut self.last_modified;
        Rgb {
            r: receive_component(&mut self.value.r, since_r, incoming.r, now, fade),
            g: receive_component(&mut self.value.g, since_g, incoming.g, now, fade),
            b: receive_component(&mut self.value.b, since_b, incoming.b, now, fade),
        }
    }

    /// Advance the demo random walk by one step
    pub fn advance_demo(&mut self, rng: &mut Rng) {
        self.value.r = walk(self.value.r, &mut self.direction.r, rng);
        self.value.g = walk(self.value.g, &mut self.direction.g, rng);
        self.value.b = walk(self.value.b, &mut self.direction.b, rng);
    }
}

fn receive_component(
    anchor: &mut u8,
    since: &mut Instant,
    incoming: u8,
    now: Instant,
    fade: &FadeConfig,
) -> u8 {
    let rendered = fade_component(*anchor, incoming, *since, now, fade);
    if rendered == incoming {
        *anchor = incoming;
        *since = now;
    }
    rendered
}

/// Move a component one step, maybe re-roll its direction, and stop it
/// before it would leave `0..=255`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn walk(value: u8, direction: &mut i8, rng: &mut Rng) -> u8 {
    let moved = (i16::from(value) + i16::from(*direction)).clamp(0, 255);

    if rng.u8(..DEMO_REROLL_ODDS) == 0 {
        *direction = rng.i8(-1..=1);
    }

    let next = moved + i16::from(*direction);
    if !(0..=255).contains(&next) {
        *direction = 0;
    }

    moved as u8
}
