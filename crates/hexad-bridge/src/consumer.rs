//! The external 12-step consumer clock seam
//!
//! The bridge never owns the consumer clock; the host supplies an
//! implementation and the bridge talks to it through this trait, passed in
//! per call.

use hexad_core::HexadResult;

/// Operating mode reported by the consumer clock, used only by the
/// phase-alignment heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerMode {
    Expressive,
    Reflective,
}

/// An external 12-step clock the bridge can read and nudge.
pub trait ConsumerClock {
    /// Current step in [1, 12].
    fn step(&self) -> u32;

    /// Seek to a step in [1, 12].
    fn seek(&mut self, step: u32) -> HexadResult<()>;

    /// Current operating mode.
    fn mode(&self) -> ConsumerMode;
}
