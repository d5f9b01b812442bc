//! Boot flourish imitating a fluorescent tube striking.
//!
//! The top segment flickers and then fills from both ends, the side segments
//! flicker and then fill strip by strip. The animation is a finite list of
//! steps; each step paints a few channels, commits, and asks for a pause.

use core::ops::Range;

use embassy_time::Duration;

use crate::LedDriver;
use crate::color::{BLACK, ColorPipeline, Rgb};
use crate::layout::StripLayout;

/// Level used while a segment flickers
const FLICKER_LEVEL: u16 = 2095;

const FLICKER_COUNT: usize = 3;
const FLICKER_ON: Duration = Duration::from_millis(20);
const FLICKER_OFF: Duration = Duration::from_millis(80);
const TOP_ENDS_PAUSE: Duration = Duration::from_millis(800);
const SIDE_STARTS_PAUSE: Duration = Duration::from_millis(500);
const FILL_STEP: Duration = Duration::from_millis(10);
const BETWEEN_SIDES_PAUSE: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    /// Configured color at the given level
    Lit(u16),
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Stroke {
    channels: Range<usize>,
    paint: Paint,
}

impl Stroke {
    fn single(channel: usize, paint: Paint) -> Self {
        Self {
            channels: channel..channel + 1,
            paint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    strokes: [Option<Stroke>; 2],
    pause: Duration,
}

impl Step {
    fn one(stroke: Stroke, pause: Duration) -> Self {
        Self {
            strokes: [Some(stroke), None],
            pause,
        }
    }

    fn two(first: Stroke, second: Stroke, pause: Duration) -> Self {
        Self {
            strokes: [Some(first), Some(second)],
            pause,
        }
    }
}

/// Startup animation state
#[derive(Debug, Clone)]
pub struct StartupAnimation {
    layout: StripLayout,
    position: usize,
}

impl StartupAnimation {
    pub const fn new(layout: StripLayout) -> Self {
        Self {
            layout,
            position: 0,
        }
    }

    /// Total number of steps
    pub const fn len(&self) -> usize {
        let layout = self.layout;
        1 + 2 * FLICKER_COUNT
            + 1
            + layout.top as usize
            + 2 * FLICKER_COUNT
            + 1
            + layout.left as usize
            + layout.right as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn is_finished(&self) -> bool {
        self.position >= self.len()
    }

    /// Paint and commit the next step.
    ///
    /// Returns the pause requested after the step, or `None` once finished.
    pub fn advance<D: LedDriver>(
        &mut self,
        driver: &mut D,
        pipeline: &ColorPipeline,
        level: u16,
        color: Rgb,
    ) -> Option<Duration> {
        let step = self.step_at(self.position, level)?;
        self.position += 1;

        for stroke in step.strokes.into_iter().flatten() {
            let (max_level, paint_color) = match stroke.paint {
                Paint::Lit(level) => (level, color),
                Paint::Dark => (level, BLACK),
            };
            for channel in stroke.channels {
                pipeline.write(driver, channel, max_level, paint_color);
            }
        }
        driver.commit();

        Some(step.pause)
    }

    fn step_at(&self, index: usize, level: u16) -> Option<Step> {
        let layout = self.layout;
        let top = layout.top_range();
        let left = layout.left_range();
        let right = layout.right_range();
        let mut index = index;

        if index == 0 {
            let all = Stroke {
                channels: 0..layout.count(),
                paint: Paint::Dark,
            };
            return Some(Step::one(all, Duration::from_millis(0)));
        }
        index -= 1;

        if index < 2 * FLICKER_COUNT {
            let (paint, pause) = flicker(index);
            let stroke = Stroke {
                channels: top,
                paint,
            };
            return Some(Step::one(stroke, pause));
        }
        index -= 2 * FLICKER_COUNT;

        if index == 0 {
            return Some(Step::two(
                Stroke::single(top.start, Paint::Lit(level)),
                Stroke::single(top.end.saturating_sub(1), Paint::Lit(level)),
                TOP_ENDS_PAUSE,
            ));
        }
        index -= 1;

        if index < top.len() {
            let channel = top.start + index;
            let mirrored = top.end - 1 - index;
            return Some(Step::two(
                Stroke::single(channel, Paint::Lit(level)),
                Stroke::single(mirrored, Paint::Lit(level)),
                FILL_STEP,
            ));
        }
        index -= top.len();

        if index < 2 * FLICKER_COUNT {
            let (paint, pause) = flicker(index);
            return Some(Step::two(
                Stroke {
                    channels: left,
                    paint,
                },
                Stroke {
                    channels: right,
                    paint,
                },
                pause,
            ));
        }
        index -= 2 * FLICKER_COUNT;

        if index == 0 {
            return Some(Step::two(
                Stroke::single(left.start, Paint::Lit(level)),
                Stroke::single(right.start, Paint::Lit(level)),
                SIDE_STARTS_PAUSE,
            ));
        }
        index -= 1;

        if index < left.len() {
            let pause = if index + 1 == left.len() {
                FILL_STEP + BETWEEN_SIDES_PAUSE
            } else {
                FILL_STEP
            };
            return Some(Step::one(
                Stroke::single(left.start + index, Paint::Lit(level)),
                pause,
            ));
        }
        index -= left.len();

        if index < right.len() {
            return Some(Step::one(
                Stroke::single(right.start + index, Paint::Lit(level)),
                FILL_STEP,
            ));
        }

        None
    }
}

/// Paint and pause of the n-th flicker half-cycle
const fn flicker(index: usize) -> (Paint, Duration) {
    if index.is_multiple_of(2) {
        (Paint::Lit(FLICKER_LEVEL), FLICKER_ON)
    } else {
        (Paint::Dark, FLICKER_OFF)
    }
}
