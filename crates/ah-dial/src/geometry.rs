//! Points on the dial

use std::fmt;

/// 2D position in view-box coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", fmt_coord(self.x), fmt_coord(self.y))
    }
}

/// Coordinate with at most three decimals and no trailing zeros
pub(crate) fn fmt_coord(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Clock dial: a circle in a view box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for Dial {
    /// 200x200 view box with a 95 radius face
    fn default() -> Self {
        Dial {
            cx: 100.0,
            cy: 100.0,
            radius: 95.0,
        }
    }
}

impl Dial {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Dial { cx, cy, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Point on the rim at a clockwise-from-12 angle
    #[inline]
    pub fn point_at(&self, angle_deg: f64) -> Point {
        self.point_at_radius(angle_deg, self.radius)
    }

    /// Point at `radius` from the centre at a clockwise-from-12 angle
    pub fn point_at_radius(&self, angle_deg: f64, radius: f64) -> Point {
        let rad = (angle_deg - 90.0).to_radians();
        Point::new(self.cx + radius * rad.cos(), self.cy + radius * rad.sin())
    }
}
