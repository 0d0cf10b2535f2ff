//! Another Hour Dial Geometry
//!
//! Renderer-agnostic geometry for the analog face. This is NOT a renderer:
//! it produces points and path data that any SVG or canvas layer can draw.
//!
//! # Angles
//!
//! 0 degrees is 12 o'clock and angles grow clockwise. Circle
//! parameterization starts at 3 o'clock, so every conversion subtracts 90
//! degrees first.
//!
//! # Contents
//!
//! - Points on the dial circle
//! - AH sector wedge plus lap-overflow indicator
//! - Tick marks and hour-number anchors
//! - Day partition bar (normal vs AH share of the real day)

pub mod geometry;
pub mod partition;
pub mod sector;
pub mod ticks;

pub use geometry::*;
pub use partition::*;
pub use sector::*;
pub use ticks::*;
