//! Day partition bar
//!
//! A vertical bar of the real day, top = midnight: the normal period fills
//! the top share, the AH period the rest. Positions are percentages from the
//! top.

use ah_core::{NormalPeriod, MINUTES_PER_DAY};

/// Scaled hours marked along the normal part of the bar
pub const MILESTONE_HOURS: [u32; 4] = [0, 6, 12, 18];

/// Scaled-hour label on the bar
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub scaled_hour: u32,
    pub label: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPartition {
    pub normal_period: NormalPeriod,
    pub normal_percent: f64,
    pub ah_percent: f64,
}

impl DayPartition {
    pub fn new(normal_period: NormalPeriod) -> Self {
        let minutes = normal_period.minutes();
        let (normal_percent, ah_percent) = if minutes == 0 {
            (0.0, 100.0)
        } else if minutes == MINUTES_PER_DAY {
            (100.0, 0.0)
        } else {
            let normal = minutes as f64 / MINUTES_PER_DAY as f64 * 100.0;
            (normal, 100.0 - normal)
        };

        DayPartition {
            normal_period,
            normal_percent,
            ah_percent,
        }
    }

    /// Where "AH 24" sits: the end of the normal period
    #[inline]
    pub fn ah24_marker_percent(&self) -> f64 {
        self.normal_percent
    }

    /// Milestones inside the normal part; only "AH 0" when it is empty
    pub fn milestones(&self) -> Vec<Milestone> {
        MILESTONE_HOURS
            .iter()
            .filter(|&&hour| hour == 0 || self.normal_percent > 0.0)
            .map(|&hour| Milestone {
                scaled_hour: hour,
                label: format!("AH {}", hour),
                percent: hour as f64 / 24.0 * self.normal_percent,
            })
            .collect()
    }
}
