//! Stopwatch and timer for Another Hour time
//!
//! Both keep only real time and are driven by explicit instants; the scale
//! factor is applied when reading, so the caller can feed whatever factor is
//! active for the current frame.

use jiff::Timestamp;

use crate::duration::{from_scaled, to_scaled};

fn ms_between(earlier: Timestamp, later: Timestamp) -> f64 {
    (later.as_millisecond() - earlier.as_millisecond()).max(0) as f64
}

/// Stopwatch accumulating real time across start/stop
#[derive(Clone, Copy, Debug, Default)]
pub struct Stopwatch {
    /// Start of the current run, if running
    started_at: Option<Timestamp>,
    /// Real time banked by previous runs
    accumulated_ms: f64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or resume; no-op while running
    pub fn start(&mut self, now: Timestamp) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stop and bank the current run
    pub fn stop(&mut self, now: Timestamp) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated_ms += ms_between(started_at, now);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Real elapsed time; never negative, even if `now` precedes the start
    pub fn elapsed_real_ms(&self, now: Timestamp) -> f64 {
        let running = self.started_at.map_or(0.0, |started_at| ms_between(started_at, now));
        self.accumulated_ms + running
    }

    /// Elapsed time as shown on the scaled display
    pub fn elapsed_scaled_ms(&self, now: Timestamp, factor: f64) -> f64 {
        to_scaled(self.elapsed_real_ms(now), factor)
    }
}

/// Countdown timer set in scaled time, running on a real deadline
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    /// Real deadline, if running
    deadline: Option<Timestamp>,
    /// Real time left while paused
    remaining_ms: f64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down `scaled_ms` of displayed time
    pub fn start(&mut self, now: Timestamp, scaled_ms: f64, factor: f64) {
        self.remaining_ms = from_scaled(scaled_ms.max(0.0), factor);
        self.deadline = Some(deadline_after(now, self.remaining_ms));
    }

    /// Freeze the remaining time
    pub fn pause(&mut self, now: Timestamp) {
        if let Some(deadline) = self.deadline.take() {
            self.remaining_ms = ms_between(now, deadline);
        }
    }

    /// Continue from the frozen remaining time
    pub fn resume(&mut self, now: Timestamp) {
        if self.deadline.is_none() && self.remaining_ms > 0.0 {
            self.deadline = Some(deadline_after(now, self.remaining_ms));
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining_real_ms(&self, now: Timestamp) -> f64 {
        match self.deadline {
            Some(deadline) => ms_between(now, deadline),
            None => self.remaining_ms,
        }
    }

    /// Remaining time as shown on the scaled display
    pub fn remaining_scaled_ms(&self, now: Timestamp, factor: f64) -> f64 {
        to_scaled(self.remaining_real_ms(now), factor)
    }

    /// True once a running countdown reaches its deadline
    pub fn is_finished(&self, now: Timestamp) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

fn deadline_after(now: Timestamp, real_ms: f64) -> Timestamp {
    let target = now.as_millisecond().saturating_add(real_ms.round() as i64);
    Timestamp::from_millisecond(target).unwrap_or(Timestamp::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_day::FIXED_SCALE;

    fn ts(ms: i64) -> Timestamp {
        Timestamp::from_millisecond(1_700_000_000_000 + ms).unwrap()
    }

    #[test]
    fn test_stopwatch_accumulates() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start(ts(0));
        stopwatch.stop(ts(1_000));
        assert!(!stopwatch.is_running());

        stopwatch.start(ts(5_000));
        assert!(stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_real_ms(ts(5_500)), 1_500.0);
    }

    #[test]
    fn test_stopwatch_start_is_idempotent() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start(ts(0));
        stopwatch.start(ts(2_000));
        assert_eq!(stopwatch.elapsed_real_ms(ts(3_000)), 3_000.0);
    }

    #[test]
    fn test_stopwatch_scaled() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start(ts(0));
        let scaled = stopwatch.elapsed_scaled_ms(ts(23_000), FIXED_SCALE);
        assert!((scaled - 24_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_stopwatch_policy_factor() {
        use crate::duration::FactorSource;
        use ah_core::{ScalingPolicy, WallClockSample};

        let source = FactorSource::Policy(ScalingPolicy::variable(720));
        let mut stopwatch = Stopwatch::new();
        stopwatch.start(ts(0));

        let normal = WallClockSample::new(6, 0, 0, 0).unwrap();
        let another_hour = WallClockSample::new(18, 0, 0, 0).unwrap();
        assert_eq!(stopwatch.elapsed_scaled_ms(ts(10_000), source.factor_at(normal)), 20_000.0);
        assert_eq!(stopwatch.elapsed_scaled_ms(ts(10_000), source.factor_at(another_hour)), 10_000.0);
    }

    #[test]
    fn test_stopwatch_reset_and_clock_skew() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start(ts(10_000));
        assert_eq!(stopwatch.elapsed_real_ms(ts(0)), 0.0);
        stopwatch.reset();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_real_ms(ts(20_000)), 0.0);
    }

    #[test]
    fn test_timer_counts_real_deadline() {
        let mut timer = Timer::new();
        // 24 scaled seconds last 23 real seconds
        timer.start(ts(0), 24_000.0, FIXED_SCALE);
        assert!(timer.is_running());
        assert!(!timer.is_finished(ts(22_999)));
        assert!(timer.is_finished(ts(23_000)));
        assert_eq!(timer.remaining_real_ms(ts(30_000)), 0.0);
    }

    #[test]
    fn test_timer_remaining_scaled() {
        let mut timer = Timer::new();
        timer.start(ts(0), 48_000.0, 2.0);
        assert_eq!(timer.remaining_real_ms(ts(4_000)), 20_000.0);
        assert_eq!(timer.remaining_scaled_ms(ts(4_000), 2.0), 40_000.0);
    }

    #[test]
    fn test_timer_pause_resume() {
        let mut timer = Timer::new();
        timer.start(ts(0), 10_000.0, 1.0);
        timer.pause(ts(4_000));
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_real_ms(ts(100_000)), 6_000.0);

        timer.resume(ts(100_000));
        assert!(timer.is_finished(ts(106_000)));
    }

    #[test]
    fn test_timer_reset() {
        let mut timer = Timer::new();
        timer.start(ts(0), 10_000.0, 1.0);
        timer.reset();
        assert!(!timer.is_running());
        assert!(!timer.is_finished(ts(20_000)));
        assert_eq!(timer.remaining_real_ms(ts(0)), 0.0);
    }
}
