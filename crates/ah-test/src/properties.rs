//! Property checks for the scaling engine
//!
//! Each check takes one input and reports whether the engine's output
//! satisfies the property. The proptest suite below feeds them random
//! samples, instants and timezones.

use ah_core::{NormalPeriod, ScalingPolicy, WallClockSample};
use ah_time::{from_scaled, to_scaled, PolicyExt};

/// Timezones used for instant-level checks
pub const SAMPLE_ZONES: [&str; 6] = [
    "UTC",
    "America/New_York",
    "Europe/London",
    "Asia/Kolkata",
    "Asia/Tokyo",
    "Australia/Lord_Howe",
];

/// Main clock, normal period: hour below 24 and equal to the whole-second formula
pub fn fixed_normal_hour_matches(sample: WallClockSample) -> bool {
    if sample.hours() >= 23 {
        return true;
    }
    let face = ScalingPolicy::Fixed.evaluate(sample);
    let real_seconds = sample.hours() * 3600 + sample.minutes() * 60 + sample.seconds();
    let expected = (real_seconds * 24 / 23) / 3600 % 24;
    face.reading.hours < 24 && face.reading.hours == expected
}

/// Main clock, AH period: hour 24 with the real minute and second
pub fn fixed_ah_reading_matches(sample: WallClockSample) -> bool {
    if sample.hours() != 23 {
        return true;
    }
    let reading = ScalingPolicy::Fixed.evaluate(sample).reading;
    reading.hours == 24 && reading.minutes == sample.minutes() && reading.whole_seconds() == sample.seconds()
}

/// A 1380-minute variable clock reads exactly like the main clock
pub fn policies_agree_at_fixed_period(sample: WallClockSample) -> bool {
    let fixed = ScalingPolicy::Fixed.evaluate(sample);
    let variable = ScalingPolicy::variable(NormalPeriod::FIXED.minutes() as i64).evaluate(sample);
    fixed.reading == variable.reading && fixed.is_in_ah_period() == variable.is_in_ah_period()
}

/// Scaling a duration and back recovers it within 1e-6 relative error
pub fn round_trip_holds(real_ms: f64, factor: f64) -> bool {
    let back = from_scaled(to_scaled(real_ms, factor), factor);
    if real_ms == 0.0 {
        return back.abs() < 1e-9;
    }
    ((back - real_ms) / real_ms).abs() <= 1e-6
}

/// Second hand moves forward by at most one tick between two close samples
///
/// Holds for policies whose normal-period factor is near 1; a short normal
/// period legitimately spins the hand faster.
pub fn second_hand_continuous(policy: &ScalingPolicy, earlier: WallClockSample, later: WallClockSample) -> bool {
    let a = policy.evaluate(earlier).hands.second_deg;
    let b = policy.evaluate(later).hands.second_deg;
    let step = (b - a).rem_euclid(360.0);
    step <= 6.0
}
