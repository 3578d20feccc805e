//! Event definitions
//!
//! The clock and the bridge queue events as they mutate; the external driver
//! drains the queue after each `advance`/`update` call. Several events can
//! fire in a burst within a single tick (e.g. step 30 produces dyad, triad,
//! and pentad boundaries plus the full-cycle event).

use crate::{DyadPhase, PentadStage, TriadPhase};

/// Kind of synchronization boundary hit by a master-clock step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncKind {
    /// Step divisible by 2.
    Dyad,
    /// Step divisible by 3.
    Triad,
    /// Step divisible by 6 (stage boundary).
    Pentad,
    /// Dyad and triad boundaries coincide.
    DyadTriad,
    /// Dyad and pentad boundaries coincide.
    DyadPentad,
    /// Triad and pentad boundaries coincide.
    TriadPentad,
    /// Step 30: every sub-cycle completes at once.
    FullCycle,
}

/// Events emitted by the master clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEvent {
    /// The global step moved (by advance or jump).
    StepAdvanced { old: u32, new: u32 },
    /// The dyadic phase flipped.
    DyadChanged { old: DyadPhase, new: DyadPhase },
    /// The triadic phase rotated.
    TriadChanged { old: TriadPhase, new: TriadPhase },
    /// The pentadic stage changed.
    StageChanged { old: PentadStage, new: PentadStage },
    /// A synchronization boundary was hit.
    SyncBoundary(SyncKind),
    /// The cycle wrapped 30 → 1; carries the new cycle count.
    CycleCompleted(u32),
}

/// Events emitted by the clock bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeEvent {
    /// A synchronization pass ran.
    Synced { master_step: u32, consumer_step: u32 },
    /// The nested shell level changed.
    ShellTransition { old: u32, new: u32 },
    /// The thread-pair permutation rotated; carries the new index.
    PermutationAdvanced(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_equality() {
        let a = ClockEvent::StepAdvanced { old: 30, new: 1 };
        let b = ClockEvent::StepAdvanced { old: 30, new: 1 };
        assert_eq!(a, b);
        assert_ne!(a, ClockEvent::CycleCompleted(1));
    }
}
