//! Day Sweep - drives a policy through a simulated day like a polling loop
//!
//! Simulates:
//! - Per-frame polling with jittered frame intervals
//! - Normal/AH period transitions
//! - Second-hand motion between consecutive frames
//! - Digital reading monotonicity within the day

use std::time::Duration;

use ah_core::{ClockFace, ScaledClockReading, ScalingPolicy, WallClockSample, MS_PER_DAY};
use ah_time::PolicyExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Frame interval model for the simulated polling loop
#[derive(Clone, Debug)]
pub struct FrameModel {
    /// Nominal interval between frames
    pub interval: Duration,
    /// Random jitter per frame (milliseconds, either direction)
    pub jitter_ms: u32,
}

impl FrameModel {
    pub fn new(interval: Duration, jitter_ms: u32) -> Self {
        FrameModel { interval, jitter_ms }
    }

    /// Evenly spaced frames
    pub fn steady(interval: Duration) -> Self {
        Self::new(interval, 0)
    }

    /// Roughly 60 fps animation frames
    pub fn animation_frame() -> Self {
        Self::new(Duration::from_millis(16), 4)
    }

    /// Background tab, throttled to about one frame a second
    pub fn throttled() -> Self {
        Self::new(Duration::from_secs(1), 250)
    }

    /// Real milliseconds until the next frame, at least 1
    pub fn next_step_ms(&self, rng: &mut StdRng) -> u32 {
        let base = self.interval.as_millis() as i64;
        let jitter = if self.jitter_ms > 0 {
            rng.gen_range(-(self.jitter_ms as i64)..=self.jitter_ms as i64)
        } else {
            0
        };
        (base + jitter).max(1) as u32
    }
}

/// A change of period between two frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// First frame in the new period
    pub at: WallClockSample,
    pub entered_ah: bool,
}

/// Sweep result and statistics
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Frames evaluated
    pub frames: u64,
    /// Period changes, in order
    pub transitions: Vec<Transition>,
    /// Largest forward second-hand step between frames (degrees, modulo a turn)
    pub max_second_step_deg: f64,
    /// Frames whose digital reading went backwards
    pub digital_regressions: u32,
    pub first: Option<ScaledClockReading>,
    pub last: Option<ScaledClockReading>,
    previous: Option<ClockFace>,
}

impl SweepReport {
    pub fn new() -> Self {
        SweepReport::default()
    }

    /// Fold one frame into the report
    pub fn record(&mut self, face: ClockFace) {
        self.frames += 1;

        if let Some(previous) = self.previous {
            if previous.is_in_ah_period() != face.is_in_ah_period() {
                self.transitions.push(Transition {
                    at: face.sample,
                    entered_ah: face.is_in_ah_period(),
                });
            }

            let step = (face.hands.second_deg - previous.hands.second_deg).rem_euclid(360.0);
            self.max_second_step_deg = self.max_second_step_deg.max(step);

            if reading_seconds(&face.reading) < reading_seconds(&previous.reading) - 1e-9 {
                self.digital_regressions += 1;
            }
        } else {
            self.first = Some(face.reading);
        }

        self.last = Some(face.reading);
        self.previous = Some(face);
    }

    /// True when the sweep entered the AH period exactly once and never left
    pub fn entered_ah_once(&self) -> bool {
        matches!(self.transitions.as_slice(), [only] if only.entered_ah)
    }
}

/// Digital reading as seconds on the (unbounded) display scale
pub fn reading_seconds(reading: &ScaledClockReading) -> f64 {
    (reading.hours * 3600 + reading.minutes * 60) as f64 + reading.seconds
}

/// Drives one policy over a window of the day
pub struct DaySweep {
    policy: ScalingPolicy,
    frames: FrameModel,
    /// Window start, ms since midnight
    start_ms: u32,
    /// Window end (exclusive), ms since midnight
    end_ms: u32,
    rng: StdRng,
}

impl DaySweep {
    /// Sweep the whole day from midnight
    pub fn new(policy: ScalingPolicy, frames: FrameModel, seed: u64) -> Self {
        DaySweep {
            policy,
            frames,
            start_ms: 0,
            end_ms: MS_PER_DAY,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restrict the sweep to `[start_ms, end_ms)`, capped at midnight
    pub fn window(mut self, start_ms: u32, end_ms: u32) -> Self {
        self.start_ms = start_ms.min(MS_PER_DAY);
        self.end_ms = end_ms.clamp(self.start_ms, MS_PER_DAY);
        self
    }

    /// Run the polling loop over the window
    pub fn run(&mut self) -> SweepReport {
        let mut report = SweepReport::new();
        let mut now_ms = self.start_ms;

        while now_ms < self.end_ms {
            let sample = WallClockSample::from_ms_of_day(now_ms);
            report.record(self.policy.evaluate(sample));
            now_ms = now_ms.saturating_add(self.frames.next_step_ms(&mut self.rng));
        }

        report
    }
}

/// Predefined sweep scenarios
pub mod scenarios {
    use super::*;

    /// Main clock over a full day at animation-frame rate
    pub fn fixed_day() -> DaySweep {
        DaySweep::new(ScalingPolicy::Fixed, FrameModel::animation_frame(), 1)
    }

    /// 12h normal / 12h AH personalized clock, throttled frames
    pub fn half_day() -> DaySweep {
        DaySweep::new(ScalingPolicy::variable(720), FrameModel::throttled(), 2)
    }

    /// Whole day is AH period
    pub fn all_ah() -> DaySweep {
        DaySweep::new(ScalingPolicy::variable(0), FrameModel::throttled(), 3)
    }

    /// Ten seconds either side of the policy's boundary, 1 ms frames
    pub fn boundary(policy: ScalingPolicy) -> DaySweep {
        let boundary = policy.normal_period().as_ms();
        DaySweep::new(policy, FrameModel::steady(Duration::from_millis(1)), 4)
            .window(boundary.saturating_sub(10_000), boundary + 10_000)
    }
}
