//! Local time sampling
//!
//! Turns a real instant plus an IANA zone name into a [`WallClockSample`].
//! Zone names are not validated up front: an unknown name surfaces as
//! [`AhError::UnknownTimezone`] here, before any scaler runs.

use ah_core::{AhError, AhResult, WallClockSample};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

/// Resolves the local time of day for an instant in a named timezone
pub trait LocalTimeResolver {
    fn resolve(&self, instant: Timestamp, timezone: &str) -> AhResult<WallClockSample>;
}

/// Resolver backed by the IANA database bundled with `jiff`
#[derive(Clone, Copy, Debug, Default)]
pub struct TzDatabaseResolver;

impl LocalTimeResolver for TzDatabaseResolver {
    fn resolve(&self, instant: Timestamp, timezone: &str) -> AhResult<WallClockSample> {
        let tz = TimeZone::get(timezone).map_err(|err| {
            tracing::warn!(timezone, error = %err, "timezone lookup failed");
            AhError::UnknownTimezone(timezone.to_string())
        })?;
        sample_of(&instant.to_zoned(tz))
    }
}

/// Local time of day carried by a zoned datetime
pub fn sample_of(zoned: &Zoned) -> AhResult<WallClockSample> {
    WallClockSample::new(
        zoned.hour() as u32,
        zoned.minute() as u32,
        zoned.second() as u32,
        zoned.millisecond() as u32,
    )
}

/// Instant from milliseconds since the Unix epoch
pub fn instant_from_epoch_ms(ms: i64) -> AhResult<Timestamp> {
    Timestamp::from_millisecond(ms).map_err(|err| AhError::InvalidInstant(err.to_string()))
}
