//! Another Hour Test Harness - simulation and property validation
//!
//! This crate provides:
//! - Day sweeps that drive a policy like a per-frame polling loop
//! - Frame-interval jitter models
//! - Engine-level scenarios across timezones and DST days
//! - Property checks for the scaling engine

pub mod day_sweep;
pub mod integration;
pub mod properties;

pub use day_sweep::*;
pub use integration::*;
