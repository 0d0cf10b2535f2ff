//! Generic duration scaling for stopwatch and timer
//!
//! `to_scaled` and `from_scaled` are exact inverses for any finite factor
//! above zero. The degenerate factors are identities, never errors.

use std::fmt;

use ah_core::{ScalingPolicy, WallClockSample};

use crate::fixed_day::FIXED_SCALE;

/// Real duration to scaled duration
///
/// `factor == 0` passes the duration through; an infinite factor collapses
/// it to zero.
pub fn to_scaled(real_ms: f64, factor: f64) -> f64 {
    if factor == 0.0 {
        return real_ms;
    }
    if factor.is_infinite() {
        return 0.0;
    }
    real_ms * factor
}

/// Scaled duration back to real duration; 0 and infinity are identities
pub fn from_scaled(scaled_ms: f64, factor: f64) -> f64 {
    if factor == 0.0 || factor.is_infinite() {
        return scaled_ms;
    }
    scaled_ms / factor
}

/// Where the stopwatch/timer factor comes from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FactorSource {
    /// Instantaneous factor of the active policy (canonical)
    Policy(ScalingPolicy),
    /// Pre-configured constant
    Constant(f64),
}

impl FactorSource {
    /// Constant 24/23 of the legacy stopwatch and timer displays
    pub fn legacy() -> Self {
        FactorSource::Constant(FIXED_SCALE)
    }

    /// Factor in effect at `sample`
    pub fn factor_at(&self, sample: WallClockSample) -> f64 {
        match self {
            FactorSource::Policy(policy) => policy.scale_factor_at(sample),
            FactorSource::Constant(factor) => *factor,
        }
    }
}

impl Default for FactorSource {
    fn default() -> Self {
        FactorSource::Policy(ScalingPolicy::Fixed)
    }
}

/// Hours/minutes/seconds/tenths breakdown of a duration for display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DurationDisplay {
    pub hours: u64,
    pub minutes: u32,
    pub seconds: u32,
    pub tenths: u32,
}

impl DurationDisplay {
    /// Negative and NaN durations display as zero
    pub fn from_ms(ms: f64) -> Self {
        let ms = if ms.is_finite() && ms > 0.0 { ms.floor() as u64 } else { 0 };
        let total_seconds = ms / 1000;
        DurationDisplay {
            hours: total_seconds / 3600,
            minutes: (total_seconds / 60 % 60) as u32,
            seconds: (total_seconds % 60) as u32,
            tenths: (ms % 1000 / 100) as u32,
        }
    }

    /// `HH:MM:SS.t`, the stopwatch format
    pub fn with_tenths(&self) -> String {
        format!("{}.{}", self, self.tenths)
    }
}

impl fmt::Display for DurationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_degenerate_factors() {
        assert_eq!(to_scaled(1500.0, 0.0), 1500.0);
        assert_eq!(to_scaled(1500.0, f64::INFINITY), 0.0);
        assert_eq!(from_scaled(1500.0, 0.0), 1500.0);
        assert_eq!(from_scaled(1500.0, f64::INFINITY), 1500.0);
    }

    #[test]
    fn test_fixed_scale() {
        // 23 real minutes read as 24 scaled minutes
        assert!((to_scaled(23.0 * 60_000.0, FIXED_SCALE) - 24.0 * 60_000.0).abs() < 1e-6);
        assert!((from_scaled(24.0 * 60_000.0, FIXED_SCALE) - 23.0 * 60_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_policy_factor_follows_period() {
        let source = FactorSource::Policy(ScalingPolicy::variable(720));
        let morning = WallClockSample::new(9, 0, 0, 0).unwrap();
        let evening = WallClockSample::new(21, 0, 0, 0).unwrap();
        assert_eq!(source.factor_at(morning), 2.0);
        assert_eq!(source.factor_at(evening), 1.0);
    }

    #[test]
    fn test_legacy_factor_is_constant() {
        let source = FactorSource::legacy();
        let late = WallClockSample::new(23, 30, 0, 0).unwrap();
        assert_eq!(source.factor_at(late), 24.0 / 23.0);
    }

    #[test]
    fn test_duration_display() {
        let display = DurationDisplay::from_ms(3_723_456.0);
        assert_eq!(display.to_string(), "01:02:03");
        assert_eq!(display.with_tenths(), "01:02:03.4");

        assert_eq!(DurationDisplay::from_ms(-10.0), DurationDisplay::default());
        assert_eq!(DurationDisplay::from_ms(f64::NAN).to_string(), "00:00:00");
    }

    proptest! {
        #[test]
        fn prop_scaling_roundtrip(real_ms in 0.0f64..1e12, factor in 1e-6f64..1e6) {
            let back = from_scaled(to_scaled(real_ms, factor), factor);
            prop_assert!((back - real_ms).abs() <= real_ms * 1e-6 + 1e-9);
        }
    }
}
