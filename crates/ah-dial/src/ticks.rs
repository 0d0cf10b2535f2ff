//! Tick marks and hour-number anchors

use crate::{Dial, Point};

pub const TICK_COUNT: u32 = 60;
pub const MAJOR_TICK_LENGTH: f64 = 10.0;
pub const MINOR_TICK_LENGTH: f64 = 5.0;
/// Gap between a major tick's inner end and its hour number
pub const LABEL_INSET: f64 = 10.0;

/// One minute mark, drawn from `inner` to `outer` on the rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: u32,
    pub inner: Point,
    pub outer: Point,
    pub major: bool,
}

/// Anchor for an hour number (12 at the top)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLabel {
    pub hour: u32,
    pub anchor: Point,
}

impl Dial {
    /// All 60 ticks; every fifth is major
    pub fn ticks(&self) -> Vec<Tick> {
        (0..TICK_COUNT)
            .map(|index| {
                let angle = index as f64 * 6.0;
                let major = index % 5 == 0;
                let length = if major { MAJOR_TICK_LENGTH } else { MINOR_TICK_LENGTH };
                Tick {
                    index,
                    inner: self.point_at_radius(angle, self.radius - length),
                    outer: self.point_at(angle),
                    major,
                }
            })
            .collect()
    }

    /// Hour numbers 12, 1, ..., 11 inside the major ticks
    pub fn hour_labels(&self) -> Vec<HourLabel> {
        let radius = self.radius - MAJOR_TICK_LENGTH - LABEL_INSET;
        (0..12)
            .map(|position| HourLabel {
                hour: if position == 0 { 12 } else { position },
                anchor: self.point_at_radius(position as f64 * 30.0, radius),
            })
            .collect()
    }
}
