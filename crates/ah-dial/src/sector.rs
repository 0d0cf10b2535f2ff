//! AH sector geometry
//!
//! The first lap of the AH sweep is drawn as a filled wedge. A sweep past
//! 360 degrees additionally gets an overflow indicator: a ray from the centre
//! to where the sweep ends on its second lap.

use ah_core::AhSectorDescriptor;

use crate::geometry::fmt_coord;
use crate::{Dial, Point};

/// Sweeps at or below this draw nothing
pub const MIN_SWEEP_DEG: f64 = 0.001;
/// Drawn sweeps stop short of a full, degenerate circle
pub const MAX_DRAWN_SWEEP_DEG: f64 = 359.999;

/// Filled wedge from 12 o'clock around the rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: Point,
    pub end: Point,
    /// Drawn sweep (clamped)
    pub sweep_deg: f64,
    pub large_arc: bool,
}

/// Geometry for one AH sector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorPath {
    pub dial: Dial,
    pub wedge: Option<Wedge>,
    /// Lap-overflow point, only for sweeps past 360
    pub overflow: Option<Point>,
}

impl SectorPath {
    pub fn empty(dial: Dial) -> Self {
        SectorPath {
            dial,
            wedge: None,
            overflow: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wedge.is_none()
    }

    /// Path data `M c L start A r,r 0 large 1 end Z`, empty when nothing is drawn
    pub fn to_svg_path(&self) -> String {
        let Some(wedge) = self.wedge else {
            return String::new();
        };
        let radius = fmt_coord(self.dial.radius);
        format!(
            "M {} L {} A {},{} 0 {} 1 {} Z",
            self.dial.center(),
            wedge.start,
            radius,
            radius,
            u8::from(wedge.large_arc),
            wedge.end
        )
    }

    /// Centre-to-rim segment marking the overflow
    pub fn overflow_ray(&self) -> Option<(Point, Point)> {
        self.overflow.map(|point| (self.dial.center(), point))
    }
}

impl Dial {
    /// Sector starting at `start_deg` and sweeping `sweep_deg` clockwise
    pub fn sector(&self, start_deg: f64, sweep_deg: f64) -> SectorPath {
        if sweep_deg.is_nan() || sweep_deg <= MIN_SWEEP_DEG {
            return SectorPath::empty(*self);
        }

        let drawn = sweep_deg.min(MAX_DRAWN_SWEEP_DEG);
        let wedge = Wedge {
            start: self.point_at(start_deg),
            end: self.point_at(start_deg + drawn),
            sweep_deg: drawn,
            large_arc: drawn > 180.0,
        };

        let overflow = if sweep_deg > 360.0 {
            Some(self.point_at(start_deg + sweep_deg % 360.0))
        } else {
            None
        };

        SectorPath {
            dial: *self,
            wedge: Some(wedge),
            overflow,
        }
    }

    /// Sector for an engine descriptor
    pub fn ah_sector(&self, descriptor: &AhSectorDescriptor) -> SectorPath {
        self.sector(descriptor.start_angle_deg, descriptor.sweep_angle_deg)
    }
}
