//! End-to-end Integration Test Suite
//!
//! Drives the full engine path (instant -> timezone -> policy -> dial) over
//! real timeline spans:
//! - World clocks in several zones
//! - DST days, where the local day is not 24 hours long
//! - Sector rendering for every frame

use ah_core::{AhError, AhResult};
use ah_dial::Dial;
use ah_time::{ClockConfig, ClockEngine};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

use crate::day_sweep::SweepReport;

// ============================================================================
// INTEGRATION TEST HARNESS
// ============================================================================

/// Integration test configuration
#[derive(Debug, Clone)]
pub struct IntegrationTestConfig {
    /// Clocks evaluated every frame
    pub clocks: Vec<ClockConfig>,
    /// First frame
    pub start: Timestamp,
    /// End of the span (exclusive)
    pub end: Timestamp,
    /// Real time between frames
    pub step_ms: u32,
    /// Dial used to render sectors
    pub dial: Dial,
}

impl IntegrationTestConfig {
    /// One local calendar day in `timezone`, one frame a minute
    pub fn local_day(clocks: Vec<ClockConfig>, date: Date, timezone: &str) -> AhResult<Self> {
        let (start, end) = local_day_bounds(date, timezone)?;
        Ok(Self {
            clocks,
            start,
            end,
            step_ms: 60_000,
            dial: Dial::default(),
        })
    }

    /// Frame interval override
    pub fn with_step_ms(mut self, step_ms: u32) -> Self {
        self.step_ms = step_ms.max(1);
        self
    }
}

/// Start and end instants of a local calendar day
pub fn local_day_bounds(date: Date, timezone: &str) -> AhResult<(Timestamp, Timestamp)> {
    let tz = TimeZone::get(timezone).map_err(|_| AhError::UnknownTimezone(timezone.to_string()))?;
    let next = date.tomorrow().map_err(invalid_instant)?;
    let start = date.to_zoned(tz.clone()).map_err(invalid_instant)?;
    let end = next.to_zoned(tz).map_err(invalid_instant)?;
    Ok((start.timestamp(), end.timestamp()))
}

fn invalid_instant(err: jiff::Error) -> AhError {
    AhError::InvalidInstant(err.to_string())
}

/// Sweep outcome for one clock
#[derive(Debug)]
pub struct ClockRun {
    pub config: ClockConfig,
    pub report: SweepReport,
    /// Frames whose sector rendered nothing
    pub empty_sector_frames: u64,
    /// Frames whose sector carried a lap-overflow ray
    pub overflow_frames: u64,
}

/// Integration test results
#[derive(Debug, Default)]
pub struct IntegrationTestResult {
    pub runs: Vec<ClockRun>,
    /// Clocks that failed to evaluate, with the first error
    pub failures: Vec<(String, AhError)>,
}

impl IntegrationTestResult {
    /// Every clock evaluated and no digital reading went backwards
    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.runs.iter().all(|run| run.report.digital_regressions == 0)
    }

    /// Run for the clock in `timezone`, if any
    pub fn run_for(&self, timezone: &str) -> Option<&ClockRun> {
        self.runs.iter().find(|run| run.config.timezone == timezone)
    }
}

/// Integration test harness
pub struct IntegrationTestHarness {
    config: IntegrationTestConfig,
    engine: ClockEngine,
}

impl IntegrationTestHarness {
    pub fn new(config: IntegrationTestConfig) -> Self {
        Self {
            config,
            engine: ClockEngine::new(),
        }
    }

    /// Run every clock over the configured span
    pub fn run(&self) -> IntegrationTestResult {
        let mut result = IntegrationTestResult::default();

        for clock in &self.config.clocks {
            match self.run_clock(clock) {
                Ok(run) => result.runs.push(run),
                Err(err) => result.failures.push((clock.timezone.clone(), err)),
            }
        }

        result
    }

    fn run_clock(&self, clock: &ClockConfig) -> AhResult<ClockRun> {
        let step = SignedDuration::from_millis(i64::from(self.config.step_ms.max(1)));
        let mut run = ClockRun {
            config: clock.clone(),
            report: SweepReport::new(),
            empty_sector_frames: 0,
            overflow_frames: 0,
        };

        let mut now = self.config.start;
        while now < self.config.end {
            let face = self.engine.evaluate(now, clock)?;
            let sector = self.config.dial.ah_sector(&face.sector);
            if sector.is_empty() {
                run.empty_sector_frames += 1;
            }
            if sector.overflow.is_some() {
                run.overflow_frames += 1;
            }
            run.report.record(face);

            now = now.checked_add(step).map_err(invalid_instant)?;
        }

        Ok(run)
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

/// New York spring-forward day (23 local hours), main clock
pub fn spring_forward_day() -> AhResult<IntegrationTestResult> {
    let config = IntegrationTestConfig::local_day(
        vec![ClockConfig::fixed("America/New_York")],
        Date::new(2024, 3, 10).map_err(invalid_instant)?,
        "America/New_York",
    )?;
    Ok(IntegrationTestHarness::new(config).run())
}

/// New York fall-back day (25 local hours), main clock
pub fn fall_back_day() -> AhResult<IntegrationTestResult> {
    let config = IntegrationTestConfig::local_day(
        vec![ClockConfig::fixed("America/New_York")],
        Date::new(2024, 11, 3).map_err(invalid_instant)?,
        "America/New_York",
    )?;
    Ok(IntegrationTestHarness::new(config).run())
}
