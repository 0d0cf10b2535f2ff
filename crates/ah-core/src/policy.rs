//! Scaling policies
//!
//! A day is split at the normal-period boundary:
//! - Normal period: real time from midnight up to the boundary, stretched or
//!   compressed onto a full 24-hour display day
//! - AH period: the rest of the real day, shown 1:1 from 24:00 upward
//!
//! `Fixed` is the main/world clock policy (23 real hours of normal period).
//! `Variable` carries a user-chosen normal period.

use serde::{Deserialize, Serialize};

use crate::{AhSectorDescriptor, WallClockSample, MINUTES_PER_DAY, MS_PER_MINUTE};

/// Length of the normal period in real minutes, always within `[0, 1440]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawMinutes", into = "i64")]
pub struct NormalPeriod(u32);

impl NormalPeriod {
    /// 23 hours, the fixed policy's boundary
    pub const FIXED: NormalPeriod = NormalPeriod(23 * 60);
    /// Whole day is AH period
    pub const NONE: NormalPeriod = NormalPeriod(0);
    /// AH period never occurs
    pub const FULL_DAY: NormalPeriod = NormalPeriod(MINUTES_PER_DAY);

    /// Create a normal period, clamping silently to `[0, 1440]`
    pub fn new(minutes: i64) -> Self {
        let clamped = minutes.clamp(0, MINUTES_PER_DAY as i64);
        if clamped != minutes {
            tracing::debug!(requested = minutes, clamped, "normal period clamped");
        }
        NormalPeriod(clamped as u32)
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_ms(self) -> u32 {
        self.0 * MS_PER_MINUTE
    }

    /// Real minutes spent in the AH period each day
    #[inline]
    pub fn ah_duration_minutes(self) -> u32 {
        MINUTES_PER_DAY - self.0
    }

    #[inline]
    pub fn ah_duration_ms(self) -> u32 {
        self.ah_duration_minutes() * MS_PER_MINUTE
    }

    /// Displayed seconds per real second during the normal period
    ///
    /// Both degenerate ends run at 1: with no normal period the scale is
    /// never used, with a full-day normal period nothing needs stretching.
    pub fn scale_factor(self) -> f64 {
        if self.0 == 0 || self.0 == MINUTES_PER_DAY {
            return 1.0;
        }
        24.0 / (self.0 as f64 / 60.0)
    }

    /// True once real time of day reaches the boundary
    #[inline]
    pub fn is_in_ah_period(self, sample: WallClockSample) -> bool {
        sample.ms_of_day() >= self.as_ms()
    }

    /// AH period duration as a sweep on a 12-hour dial, not clamped to 360
    #[inline]
    pub fn sweep_angle_deg(self) -> f64 {
        self.ah_duration_minutes() as f64 / (12.0 * 60.0) * 360.0
    }
}

impl Default for NormalPeriod {
    fn default() -> Self {
        NormalPeriod::FIXED
    }
}

impl From<i64> for NormalPeriod {
    fn from(minutes: i64) -> Self {
        NormalPeriod::new(minutes)
    }
}

/// Minutes as they arrive from a settings document: integer or float
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMinutes {
    Whole(i64),
    Float(f64),
}

impl From<RawMinutes> for NormalPeriod {
    fn from(raw: RawMinutes) -> Self {
        match raw {
            RawMinutes::Whole(minutes) => NormalPeriod::new(minutes),
            RawMinutes::Float(minutes) if minutes.is_nan() => NormalPeriod::default(),
            // Truncates toward zero; `as` saturates at the i64 bounds
            RawMinutes::Float(minutes) => NormalPeriod::new(minutes.trunc() as i64),
        }
    }
}

impl From<NormalPeriod> for i64 {
    fn from(period: NormalPeriod) -> Self {
        period.0 as i64
    }
}

/// Active scaling policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "policyKind", rename_all = "lowercase")]
pub enum ScalingPolicy {
    /// 23 real hours shown as 24, then one unscaled hour shown as 24:xx
    #[default]
    Fixed,
    /// Configurable normal period, AH hours climb 24, 25, 26...
    Variable {
        #[serde(rename = "normalPeriodMinutes", default)]
        normal_period: NormalPeriod,
    },
}

impl ScalingPolicy {
    /// Variable policy with a clamped normal period
    pub fn variable(minutes: i64) -> Self {
        ScalingPolicy::Variable {
            normal_period: NormalPeriod::new(minutes),
        }
    }

    /// Normal period in effect; `Fixed` is exactly 1380 minutes
    pub fn normal_period(&self) -> NormalPeriod {
        match self {
            ScalingPolicy::Fixed => NormalPeriod::FIXED,
            ScalingPolicy::Variable { normal_period } => *normal_period,
        }
    }

    pub fn is_in_ah_period(&self, sample: WallClockSample) -> bool {
        self.normal_period().is_in_ah_period(sample)
    }

    /// Scale factor applied during the normal period
    pub fn normal_scale_factor(&self) -> f64 {
        self.normal_period().scale_factor()
    }

    /// Instantaneous factor at `sample`: 1 inside the AH period
    pub fn scale_factor_at(&self, sample: WallClockSample) -> f64 {
        if self.is_in_ah_period(sample) {
            1.0
        } else {
            self.normal_scale_factor()
        }
    }

    /// AH sector for the dial, anchored at 12 o'clock
    pub fn sector(&self, sample: WallClockSample) -> AhSectorDescriptor {
        let period = self.normal_period();
        AhSectorDescriptor::new(period.sweep_angle_deg(), period.is_in_ah_period(sample))
    }
}
