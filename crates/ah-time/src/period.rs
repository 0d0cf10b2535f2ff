//! Day split shared by both scalers
//!
//! Fixed and Variable policies go through the same boundary test and the same
//! decomposition, so `Variable(1380)` and `Fixed` agree digitally by
//! construction.

use ah_core::{
    HandAngles, NormalPeriod, ScaledClockReading, WallClockSample, MS_PER_DAY, MS_PER_HOUR,
    MS_PER_MINUTE, MS_PER_SECOND,
};

/// Where a sample falls relative to the normal-period boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DayPosition {
    /// Before the boundary, with the scaled time of day
    Normal { scaled_ms: f64 },
    /// At or past the boundary, with real time elapsed since it
    AnotherHour { elapsed_ms: u32 },
}

pub(crate) fn locate(sample: WallClockSample, period: NormalPeriod) -> DayPosition {
    let real_ms = sample.ms_of_day();
    let boundary_ms = period.as_ms();

    if real_ms >= boundary_ms {
        return DayPosition::AnotherHour {
            elapsed_ms: real_ms - boundary_ms,
        };
    }

    DayPosition::Normal {
        scaled_ms: scale_ms(real_ms, period),
    }
}

/// `real_ms * factor`, computed as one rounding of an exact quotient so
/// scaled hour boundaries land on whole milliseconds
fn scale_ms(real_ms: u32, period: NormalPeriod) -> f64 {
    let minutes = period.minutes();
    if minutes == 0 || minutes == NormalPeriod::FULL_DAY.minutes() {
        return real_ms as f64;
    }
    real_ms as f64 * (24.0 * 60.0) / minutes as f64
}

/// Split milliseconds into whole hours, whole minutes and fractional seconds
pub(crate) fn decompose(ms: f64) -> ScaledClockReading {
    let whole = ms.floor();
    let fraction = ms - whole;
    let whole = whole as u64;

    ScaledClockReading {
        hours: (whole / MS_PER_HOUR as u64) as u32,
        minutes: (whole / MS_PER_MINUTE as u64 % 60) as u32,
        seconds: ((whole % MS_PER_MINUTE as u64) as f64 + fraction) / MS_PER_SECOND as f64,
    }
}

/// Digital reading inside the AH period: 24 plus real elapsed time, 1:1
pub(crate) fn another_hour_reading(elapsed_ms: u32) -> ScaledClockReading {
    let mut reading = decompose(elapsed_ms as f64);
    reading.hours += 24;
    reading
}

/// Hands inside the AH period
///
/// The hour hand restarts at 12 o'clock and moves 30 degrees per real hour
/// spent in the period, so it ends the period on the sector's sweep angle.
/// Minute and second hands replay real wall-clock time.
pub(crate) fn another_hour_hands(sample: WallClockSample, elapsed_ms: u32) -> HandAngles {
    let seconds = sample.seconds_f64();
    HandAngles {
        hour_deg: elapsed_ms as f64 / MS_PER_HOUR as f64 * 30.0,
        minute_deg: sample.minutes() as f64 * 6.0 + seconds * 0.1,
        second_deg: seconds * 6.0,
    }
}

/// Real time left before midnight closes the AH period
pub(crate) fn ah_remaining_ms(sample: WallClockSample, position: DayPosition) -> Option<u32> {
    match position {
        DayPosition::AnotherHour { .. } => Some(MS_PER_DAY - sample.ms_of_day()),
        DayPosition::Normal { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_exact_boundary() {
        let reading = decompose(3_600_000.0);
        assert_eq!(reading, ScaledClockReading::new(1, 0, 0.0));
    }

    #[test]
    fn test_decompose_keeps_fraction() {
        let reading = decompose(59_999.5);
        assert_eq!(reading.hours, 0);
        assert_eq!(reading.minutes, 0);
        assert!((reading.seconds - 59.9995).abs() < 1e-9);
    }

    #[test]
    fn test_locate_boundary() {
        let period = NormalPeriod::FIXED;
        let before = WallClockSample::new(22, 59, 59, 999).unwrap();
        let at = WallClockSample::new(23, 0, 0, 0).unwrap();

        assert!(matches!(locate(before, period), DayPosition::Normal { .. }));
        assert_eq!(locate(at, period), DayPosition::AnotherHour { elapsed_ms: 0 });
    }

    #[test]
    fn test_scaled_hour_boundaries_are_exact() {
        // 23 real hours map to 24 scaled hours; every 57.5 real minutes is one scaled hour
        for k in 1..23u32 {
            let real_ms = k * 3_450_000;
            let sample = WallClockSample::from_ms_of_day(real_ms);
            match locate(sample, NormalPeriod::FIXED) {
                DayPosition::Normal { scaled_ms } => assert_eq!(scaled_ms, (k * MS_PER_HOUR) as f64),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_ah_remaining() {
        let sample = WallClockSample::new(23, 30, 0, 0).unwrap();
        let position = locate(sample, NormalPeriod::FIXED);
        assert_eq!(ah_remaining_ms(sample, position), Some(30 * MS_PER_MINUTE));
    }
}
