//! Another Hour Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every Another Hour clock:
//! - Wall-clock samples (local h/m/s/ms since midnight)
//! - Scaling policies (fixed 23-hour day, variable normal period)
//! - Clock readings, hand angles and the AH sector descriptor
//! - Error taxonomy

pub mod error;
pub mod face;
pub mod policy;
pub mod time;

pub use error::*;
pub use face::*;
pub use policy::*;
pub use time::*;
