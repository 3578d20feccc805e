//! HEXAD Test - Simulation harness for the composite clock
//!
//! Provides:
//! - Scripted and drifting consumer clocks
//! - A scenario runner driving clock + bridge for many ticks
//!
//! Property tests live in `tests/`, benches in `benches/`.

pub mod simulator;

pub use simulator::*;
