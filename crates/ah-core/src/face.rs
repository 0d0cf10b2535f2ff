//! Clock outputs: digital reading, hand angles and the AH sector
//!
//! Angles are degrees, 0 = 12 o'clock, clockwise. They are NOT wrapped to
//! `[0, 360)`: values past a full turn mark lap overflow and are left for
//! the renderer to interpret.

use std::fmt;

use crate::WallClockSample;

/// Digital display value
///
/// Only `hours` may exceed its natural modulus; `hours >= 24` signals the
/// AH period.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScaledClockReading {
    pub hours: u32,
    pub minutes: u32,
    /// Seconds within the minute, fraction retained
    pub seconds: f64,
}

impl ScaledClockReading {
    pub fn new(hours: u32, minutes: u32, seconds: f64) -> Self {
        ScaledClockReading {
            hours,
            minutes,
            seconds,
        }
    }

    #[inline]
    pub fn is_another_hour(&self) -> bool {
        self.hours >= 24
    }

    #[inline]
    pub fn whole_seconds(&self) -> u32 {
        self.seconds.floor() as u32
    }
}

impl fmt::Display for ScaledClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours,
            self.minutes,
            self.whole_seconds()
        )
    }
}

/// Analog hand rotations in degrees
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

impl HandAngles {
    /// Conventional 12-hour dial angles for a h/m/s reading
    pub fn conventional(hours: u32, minutes: u32, seconds: f64) -> Self {
        HandAngles {
            hour_deg: (hours % 12) as f64 * 30.0 + minutes as f64 * 0.5,
            minute_deg: minutes as f64 * 6.0 + seconds * 0.1,
            second_deg: seconds * 6.0,
        }
    }
}

/// Highlighted AH wedge on the dial
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AhSectorDescriptor {
    /// Always 0 (12 o'clock)
    pub start_angle_deg: f64,
    /// AH period length on a 12-hour dial, may exceed 360
    pub sweep_angle_deg: f64,
    pub is_in_ah_period: bool,
}

impl AhSectorDescriptor {
    pub fn new(sweep_angle_deg: f64, is_in_ah_period: bool) -> Self {
        AhSectorDescriptor {
            start_angle_deg: 0.0,
            sweep_angle_deg,
            is_in_ah_period,
        }
    }

    /// Where the sweep ends once past a full lap
    pub fn overflow_angle_deg(&self) -> Option<f64> {
        if self.sweep_angle_deg > 360.0 {
            Some(self.start_angle_deg + self.sweep_angle_deg % 360.0)
        } else {
            None
        }
    }
}

/// Everything a clock face needs for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockFace {
    /// Real local time the face was computed from
    pub sample: WallClockSample,
    pub reading: ScaledClockReading,
    pub hands: HandAngles,
    pub sector: AhSectorDescriptor,
    /// Real milliseconds left before the AH period ends at midnight
    pub ah_remaining_ms: Option<u32>,
}

impl ClockFace {
    #[inline]
    pub fn is_in_ah_period(&self) -> bool {
        self.sector.is_in_ah_period
    }
}
