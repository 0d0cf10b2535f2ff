//! Fixed-Day scaler - the main and world clock policy
//!
//! Real 00:00-23:00 is compressed by 24/23 onto a full 24-hour display day.
//! Real 23:00-24:00 is the Another Hour: shown unscaled as 24:00:00-24:59:59
//! while the dial replays a fresh 0:00-1:00 sweep.

use ah_core::{ClockFace, HandAngles, NormalPeriod, ScalingPolicy, WallClockSample};

use crate::period::{self, DayPosition};

/// Scale factor during the normal period
pub const FIXED_SCALE: f64 = 24.0 / 23.0;

/// Evaluate the fixed policy for one sample
pub fn evaluate(sample: WallClockSample) -> ClockFace {
    let position = period::locate(sample, NormalPeriod::FIXED);

    let (reading, hands) = match position {
        DayPosition::Normal { scaled_ms } => {
            let mut reading = period::decompose(scaled_ms);
            reading.hours %= 24;
            let hands = HandAngles::conventional(reading.hours, reading.minutes, reading.seconds);
            (reading, hands)
        }
        DayPosition::AnotherHour { elapsed_ms } => (
            period::another_hour_reading(elapsed_ms),
            period::another_hour_hands(sample, elapsed_ms),
        ),
    };

    ClockFace {
        sample,
        reading,
        hands,
        sector: ScalingPolicy::Fixed.sector(sample),
        ah_remaining_ms: period::ah_remaining_ms(sample, position),
    }
}
