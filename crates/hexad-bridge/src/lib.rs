//! HEXAD Bridge - 30-step master clock onto a 12-step consumer clock
//!
//! This crate implements the re-projection layer:
//! - Three selectable 30 → 12 mapping strategies
//! - Nudge synchronization of the external consumer clock
//! - Continuous bridge-coherence and phase-alignment metrics
//! - Rotating thread-pair permutation schedule

pub mod bridge;
pub mod consumer;
pub mod mapping;
pub mod permutation;

pub use bridge::*;
pub use consumer::*;
pub use mapping::*;
pub use permutation::*;
