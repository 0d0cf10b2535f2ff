//! Time primitives for Another Hour clocks
//!
//! Every evaluation starts from a [`WallClockSample`]: the local time of day
//! at one real instant in one timezone. Samples are derived fresh on every
//! call and never cached.

use std::fmt;

use crate::{AhError, AhResult};

pub const MS_PER_SECOND: u32 = 1_000;
pub const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u32 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u32 = 24 * MS_PER_HOUR;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Local time of day at one real instant
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WallClockSample {
    hours: u8,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
}

impl WallClockSample {
    pub const MIDNIGHT: WallClockSample = WallClockSample {
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    };

    /// Build a sample, rejecting fields outside their natural range
    pub fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> AhResult<Self> {
        check("hours", hours, 23)?;
        check("minutes", minutes, 59)?;
        check("seconds", seconds, 59)?;
        check("milliseconds", milliseconds, 999)?;

        Ok(WallClockSample {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            milliseconds: milliseconds as u16,
        })
    }

    /// Build a sample from milliseconds since local midnight (wraps at one day)
    pub fn from_ms_of_day(ms: u32) -> Self {
        let ms = ms % MS_PER_DAY;
        WallClockSample {
            hours: (ms / MS_PER_HOUR) as u8,
            minutes: (ms / MS_PER_MINUTE % 60) as u8,
            seconds: (ms / MS_PER_SECOND % 60) as u8,
            milliseconds: (ms % MS_PER_SECOND) as u16,
        }
    }

    #[inline]
    pub fn hours(self) -> u32 {
        self.hours as u32
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.minutes as u32
    }

    #[inline]
    pub fn seconds(self) -> u32 {
        self.seconds as u32
    }

    #[inline]
    pub fn milliseconds(self) -> u32 {
        self.milliseconds as u32
    }

    /// Milliseconds elapsed since local midnight
    #[inline]
    pub fn ms_of_day(self) -> u32 {
        ((self.hours() * 60 + self.minutes()) * 60 + self.seconds()) * MS_PER_SECOND
            + self.milliseconds()
    }

    /// Seconds within the current minute, fraction included
    #[inline]
    pub fn seconds_f64(self) -> f64 {
        self.seconds() as f64 + self.milliseconds() as f64 / MS_PER_SECOND as f64
    }
}

fn check(field: &'static str, value: u32, max: u32) -> AhResult<()> {
    if value > max {
        return Err(AhError::InvalidSample { field, value });
    }
    Ok(())
}

impl fmt::Display for WallClockSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Debug for WallClockSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wall({:02}:{:02}:{:02}.{:03})",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_of_day() {
        let sample = WallClockSample::new(23, 0, 0, 0).unwrap();
        assert_eq!(sample.ms_of_day(), 23 * MS_PER_HOUR);

        let sample = WallClockSample::new(12, 34, 56, 789).unwrap();
        assert_eq!(sample.ms_of_day(), 45_296_789);
    }

    #[test]
    fn test_from_ms_of_day_roundtrip() {
        let sample = WallClockSample::new(22, 59, 59, 999).unwrap();
        assert_eq!(WallClockSample::from_ms_of_day(sample.ms_of_day()), sample);
    }

    #[test]
    fn test_from_ms_of_day_wraps() {
        assert_eq!(WallClockSample::from_ms_of_day(MS_PER_DAY), WallClockSample::MIDNIGHT);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            WallClockSample::new(24, 0, 0, 0),
            Err(AhError::InvalidSample { field: "hours", value: 24 })
        );
        assert!(WallClockSample::new(0, 60, 0, 0).is_err());
        assert!(WallClockSample::new(0, 0, 60, 0).is_err());
        assert!(WallClockSample::new(0, 0, 0, 1000).is_err());
    }

    #[test]
    fn test_display() {
        let sample = WallClockSample::new(7, 5, 3, 900).unwrap();
        assert_eq!(sample.to_string(), "07:05:03");
        assert_eq!(format!("{:?}", sample), "wall(07:05:03.900)");
    }

    #[test]
    fn test_seconds_fraction() {
        let sample = WallClockSample::new(0, 0, 12, 250).unwrap();
        assert!((sample.seconds_f64() - 12.25).abs() < 1e-12);
    }
}
