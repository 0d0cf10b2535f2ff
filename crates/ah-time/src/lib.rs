//! Another Hour Time Engine - scaled clocks and duration scaling
//!
//! This crate implements the time-scaling engine:
//! - Local time sampling from an IANA timezone database
//! - Fixed-Day scaler (23 real hours shown as 24, then the Another Hour)
//! - Variable-Day scaler (configurable normal period)
//! - Generic duration scaling for stopwatch and timer
//! - Clock configuration and a stateless engine façade
//!
//! Every evaluation is pure: the engine keeps no state between calls.

pub mod clock;
pub mod config;
pub mod duration;
pub mod engine;
pub mod fixed_day;
mod period;
pub mod sampler;
pub mod variable_day;

pub use clock::*;
pub use config::*;
pub use duration::*;
pub use engine::*;
pub use sampler::*;
