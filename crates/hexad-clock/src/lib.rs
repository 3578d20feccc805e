//! HEXAD Master Clock - 30-step composite cycle
//!
//! This crate implements the master clock:
//! - Single 30-step tick counter, LCM(2,3,5)
//! - Five-stage composite pipeline run on every advance/jump
//! - 8-lane concurrency and 9-lane convolution weight vectors
//! - Multi-boundary sync event detection

pub mod clock;
pub mod vectors;

pub use clock::*;
pub use vectors::*;
