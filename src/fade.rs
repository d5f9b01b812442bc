//! Fade-out of darkening streamed colors.
//!
//! Brightening is applied at once. Darkening moves linearly from the
//! anchored value towards the new value over a fixed window, so a single
//! dark or dropped frame does not snap a channel to black.

use embassy_time::{Duration, Instant};

use crate::config::FadeConfig;

/// Faded value of a single component
///
/// # Arguments
/// * `previous` - Anchored value the fade starts from
/// * `incoming` - Newly received value
/// * `since` - Time the anchor was taken
/// * `now` - Current time
/// * `window` - Time to reach `incoming`
#[allow(clippy::cast_possible_truncation)]
pub fn fade_out(previous: u8, incoming: u8, since: Instant, now: Instant, window: Duration) -> u8 {
    if incoming >= previous {
        return incoming;
    }

    let elapsed = now.saturating_duration_since(since);
    if elapsed >= window {
        return incoming;
    }

    let window_ms = window.as_millis();
    let remaining_ms = window_ms - elapsed.as_millis();
    let span = u64::from(previous - incoming);
    let decayed = u64::from(incoming) + span * remaining_ms / window_ms;

    decayed.clamp(u64::from(incoming), u64::from(previous)) as u8
}

/// Faded value of a component, or `incoming` itself if it is not darker
/// than the threshold
pub fn fade_component(
    previous: u8,
    incoming: u8,
    since: Instant,
    now: Instant,
    config: &FadeConfig,
) -> u8 {
    if incoming < config.threshold {
        fade_out(previous, incoming, since, now, config.window)
    } else {
        incoming
    }
}
