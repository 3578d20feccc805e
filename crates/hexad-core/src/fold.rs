//! The 2×3→4 fold
//!
//! A naive cross product of the dyad (period 2) and triad (period 3) needs 6
//! steps to visit every pair. The fold staggers which sub-clock advances on
//! which step, carrying the same information in 4 real steps per inner cycle:
//!
//! | phase | composite | dyad         | triad              |
//! |-------|-----------|--------------|--------------------|
//! | 1     | 1         | A (fresh)    | Phase1 (fresh)     |
//! | 2     | 4         | A (held)     | Phase2 (advanced)  |
//! | 3     | 6         | B (advanced) | Phase2 (held)      |
//! | 4     | 1         | B (held)     | Phase3 (advanced)  |
//!
//! Some (dyad, triad) pairs are skipped within a single fold cycle and only
//! reached across multiple outer pentadic stages. That non-uniformity is the
//! price of the compression, not a defect.

use crate::{DyadPhase, FourStepPhase, TriadPhase};

/// How a sub-clock moved (or didn't) on the current fold step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// First step of the fold cycle; nothing has been held or advanced yet.
    Fresh,
    /// The sub-clock kept its previous value this step.
    Held,
    /// The sub-clock moved to its next value this step.
    Advanced,
}

/// One row of the fold table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldState {
    /// Composite value carried by this step, always 1, 4, or 6.
    pub composite: u32,
    /// Dyad value at this step.
    pub dyad: DyadPhase,
    /// Whether the dyad held or advanced.
    pub dyad_motion: Motion,
    /// Triad value at this step.
    pub triad: TriadPhase,
    /// Whether the triad held or advanced.
    pub triad_motion: Motion,
}

impl FoldState {
    /// Look up the fold row for a four-step phase. Total over all 4 phases.
    pub fn for_phase(phase: FourStepPhase) -> Self {
        match phase {
            FourStepPhase::Step1 => FoldState {
                composite: 1,
                dyad: DyadPhase::A,
                dyad_motion: Motion::Fresh,
                triad: TriadPhase::Phase1,
                triad_motion: Motion::Fresh,
            },
            FourStepPhase::Step2 => FoldState {
                composite: 4,
                dyad: DyadPhase::A,
                dyad_motion: Motion::Held,
                triad: TriadPhase::Phase2,
                triad_motion: Motion::Advanced,
            },
            FourStepPhase::Step3 => FoldState {
                composite: 6,
                dyad: DyadPhase::B,
                dyad_motion: Motion::Advanced,
                triad: TriadPhase::Phase2,
                triad_motion: Motion::Held,
            },
            FourStepPhase::Step4 => FoldState {
                composite: 1,
                dyad: DyadPhase::B,
                dyad_motion: Motion::Held,
                triad: TriadPhase::Phase3,
                triad_motion: Motion::Advanced,
            },
        }
    }

    /// Fold row for a global step in [1, 30].
    #[inline]
    pub fn for_step(step: u32) -> Self {
        Self::for_phase(FourStepPhase::for_step(step))
    }

    /// The full fold table in phase order.
    pub fn full_table() -> [FoldState; 4] {
        [
            Self::for_phase(FourStepPhase::Step1),
            Self::for_phase(FourStepPhase::Step2),
            Self::for_phase(FourStepPhase::Step3),
            Self::for_phase(FourStepPhase::Step4),
        ]
    }
}

impl Default for FoldState {
    fn default() -> Self {
        Self::for_phase(FourStepPhase::Step1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_table_exhaustive() {
        for phase in [
            FourStepPhase::Step1,
            FourStepPhase::Step2,
            FourStepPhase::Step3,
            FourStepPhase::Step4,
        ] {
            let fold = FoldState::for_phase(phase);
            assert!(matches!(fold.composite, 1 | 4 | 6));
        }
    }

    #[test]
    fn test_fold_delay_pattern() {
        // (A,1) -> (A,2) -> (B,2) -> (B,3): dyad held two steps while the
        // triad advances, then roles swap.
        let table = FoldState::full_table();
        assert_eq!(table[0].dyad, DyadPhase::A);
        assert_eq!(table[1].dyad, DyadPhase::A);
        assert_eq!(table[2].dyad, DyadPhase::B);
        assert_eq!(table[3].dyad, DyadPhase::B);
        assert_eq!(table[1].triad, table[2].triad);
        assert_eq!(table[1].dyad_motion, Motion::Held);
        assert_eq!(table[2].triad_motion, Motion::Held);
    }

    #[test]
    fn test_fold_for_step_period_four() {
        for step in 1..=26 {
            assert_eq!(FoldState::for_step(step), FoldState::for_step(step + 4));
        }
    }
}
