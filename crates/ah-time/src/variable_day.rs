//! Variable-Day scaler - the personalized clock policy
//!
//! The user picks how many real minutes the normal period lasts. Those
//! minutes are stretched or compressed onto a 24-hour display day; the rest of
//! the real day is the AH period, shown 1:1 as 24:xx, 25:xx, 26:xx... with no
//! wraparound.

use ah_core::{ClockFace, HandAngles, NormalPeriod, ScalingPolicy, WallClockSample};

use crate::period::{self, DayPosition};

/// Evaluate the variable policy for one sample
///
/// `normal_period` is already clamped to `[0, 1440]` by [`NormalPeriod`].
pub fn evaluate(sample: WallClockSample, normal_period: NormalPeriod) -> ClockFace {
    let position = period::locate(sample, normal_period);

    let (reading, hands) = match position {
        DayPosition::Normal { scaled_ms } => {
            let reading = period::decompose(scaled_ms);
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
        sector: ScalingPolicy::Variable { normal_period }.sector(sample),
        ah_remaining_ms: period::ah_remaining_ms(sample, position),
    }
}
