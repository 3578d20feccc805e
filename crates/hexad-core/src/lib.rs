//! HEXAD Core - Fundamental types for the composite periodic clock
//!
//! This crate defines the types shared by the master clock and the bridge:
//! - Phase enums and their pure step projections (dyad, triad, pentad, four-step)
//! - The 2×3→4 fold table
//! - Clock and bridge event enums
//! - Error taxonomy and protocol constants
//!
//! The master cycle length is LCM(2,3,5) = 30: the smallest step count on
//! which the 2-, 3-, and 5-periodic sub-cycles all complete together.

pub mod error;
pub mod event;
pub mod fold;
pub mod phase;

pub use error::*;
pub use event::*;
pub use fold::*;
pub use phase::*;

/// Steps in one full master cycle, LCM(2,3,5).
pub const CYCLE_STEPS: u32 = 30;

/// Steps in one consumer cycle (the external 12-step clock).
pub const CONSUMER_STEPS: u32 = 12;

/// Steps per pentadic stage.
pub const STAGE_STEPS: u32 = 6;

/// Pentadic stages per cycle.
pub const STAGE_COUNT: u32 = 5;

/// Lanes in the concurrency vector (2³).
pub const CONCURRENCY_LANES: usize = 8;

/// Lanes in the convolution vector (3²).
pub const CONVOLUTION_LANES: usize = 9;

/// Per-tick decay factor for unrefreshed lane weights.
pub const LANE_DECAY: f32 = 0.9;
