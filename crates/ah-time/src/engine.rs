//! Clock Engine - resolves local time and applies the active policy
//!
//! The engine holds no time state. Each call samples, scales and returns;
//! the caller's polling loop owns the instant, the policy and the timezone and
//! re-reads them every frame.

use ah_core::{AhResult, ClockFace, ScalingPolicy, WallClockSample};
use jiff::Timestamp;

use crate::{fixed_day, variable_day, ClockConfig, LocalTimeResolver, TzDatabaseResolver};

/// Evaluation of a policy against a wall-clock sample
pub trait PolicyExt {
    fn evaluate(&self, sample: WallClockSample) -> ClockFace;
}

impl PolicyExt for ScalingPolicy {
    fn evaluate(&self, sample: WallClockSample) -> ClockFace {
        match self {
            ScalingPolicy::Fixed => fixed_day::evaluate(sample),
            ScalingPolicy::Variable { normal_period } => variable_day::evaluate(sample, *normal_period),
        }
    }
}

/// Clock Engine - stateless façade over a time resolver
#[derive(Clone, Debug, Default)]
pub struct ClockEngine<R = TzDatabaseResolver> {
    resolver: R,
}

impl ClockEngine {
    /// Engine backed by the bundled IANA database
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: LocalTimeResolver> ClockEngine<R> {
    /// Engine with a custom resolver
    pub fn with_resolver(resolver: R) -> Self {
        ClockEngine { resolver }
    }

    /// Local wall-clock sample for `config`'s timezone
    pub fn sample(&self, instant: Timestamp, config: &ClockConfig) -> AhResult<WallClockSample> {
        self.resolver.resolve(instant, &config.timezone)
    }

    /// Full clock face for one frame
    pub fn evaluate(&self, instant: Timestamp, config: &ClockConfig) -> AhResult<ClockFace> {
        let sample = self.sample(instant, config)?;
        let face = config.policy.evaluate(sample);
        tracing::trace!(
            timezone = %config.timezone,
            actual = %sample,
            scaled = %face.reading,
            ah = face.is_in_ah_period(),
            "clock evaluated"
        );
        Ok(face)
    }

    /// Evaluate several clocks at one instant (world clock view)
    pub fn evaluate_all<'a, I>(&self, instant: Timestamp, configs: I) -> Vec<AhResult<ClockFace>>
    where
        I: IntoIterator<Item = &'a ClockConfig>,
    {
        configs
            .into_iter()
            .map(|config| self.evaluate(instant, config))
            .collect()
    }

    /// Instantaneous scale factor for stopwatch and timer displays
    pub fn scale_factor(&self, instant: Timestamp, config: &ClockConfig) -> AhResult<f64> {
        let sample = self.sample(instant, config)?;
        Ok(config.policy.scale_factor_at(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ah_core::{AhError, ScaledClockReading};

    /// Resolver that ignores the instant and returns a fixed sample
    struct StaticResolver(WallClockSample);

    impl LocalTimeResolver for StaticResolver {
        fn resolve(&self, _instant: Timestamp, _timezone: &str) -> AhResult<WallClockSample> {
            Ok(self.0)
        }
    }

    fn instant(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_engine_fixed_ah_hour() {
        let engine = ClockEngine::new();
        let face = engine
            .evaluate(instant("2024-03-01T23:10:00Z"), &ClockConfig::fixed("UTC"))
            .unwrap();
        assert!(face.is_in_ah_period());
        assert_eq!(face.reading, ScaledClockReading::new(24, 10, 0.0));
    }

    #[test]
    fn test_engine_timezone_shift() {
        let engine = ClockEngine::new();
        let now = instant("2024-03-01T09:00:00Z");

        let utc = engine.evaluate(now, &ClockConfig::variable("UTC", 720)).unwrap();
        let tokyo = engine.evaluate(now, &ClockConfig::variable("Asia/Tokyo", 720)).unwrap();

        assert!(!utc.is_in_ah_period());
        assert!(tokyo.is_in_ah_period());
        assert_eq!(tokyo.reading, ScaledClockReading::new(30, 0, 0.0));
    }

    #[test]
    fn test_engine_unknown_timezone() {
        let engine = ClockEngine::new();
        let result = engine.evaluate(instant("2024-03-01T09:00:00Z"), &ClockConfig::fixed("Nowhere/Land"));
        assert_eq!(result, Err(AhError::UnknownTimezone("Nowhere/Land".to_string())));
    }

    #[test]
    fn test_engine_evaluate_all() {
        let engine = ClockEngine::new();
        let configs = [ClockConfig::fixed("UTC"), ClockConfig::fixed("Bogus/Zone")];
        let faces = engine.evaluate_all(instant("2024-03-01T12:00:00Z"), &configs);
        assert_eq!(faces.len(), 2);
        assert!(faces[0].is_ok());
        assert!(faces[1].is_err());
    }

    #[test]
    fn test_engine_custom_resolver() {
        let sample = WallClockSample::new(18, 0, 0, 0).unwrap();
        let engine = ClockEngine::with_resolver(StaticResolver(sample));
        let config = ClockConfig::variable("ignored", 720);

        let now = instant("2000-01-01T00:00:00Z");
        assert_eq!(engine.scale_factor(now, &config).unwrap(), 1.0);
        assert_eq!(engine.evaluate(now, &config).unwrap().sample, sample);
    }

    #[test]
    fn test_policy_dispatch() {
        let sample = WallClockSample::new(22, 0, 0, 0).unwrap();
        assert_eq!(
            ScalingPolicy::Fixed.evaluate(sample).reading,
            ScalingPolicy::variable(1380).evaluate(sample).reading
        );
    }
}
