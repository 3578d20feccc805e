//! Phase projections of the 30-step master cycle
//!
//! Every type here is a pure function of the global step. The step is the
//! only true state; phases never advance independently.
//!
//! All projections take a step in [1, 30]. Values outside that range are the
//! caller's bug; the clock validates before projecting.

/// Dyadic phase (period 2, A/B polarity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DyadPhase {
    A,
    B,
}

impl DyadPhase {
    /// Phase for a global step: `(step - 1) mod 2`.
    #[inline]
    pub fn for_step(step: u32) -> Self {
        if (step - 1) % 2 == 0 {
            DyadPhase::A
        } else {
            DyadPhase::B
        }
    }

    /// 0 for A, 1 for B.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            DyadPhase::A => 0,
            DyadPhase::B => 1,
        }
    }
}

/// Triadic phase (period 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriadPhase {
    Phase1,
    Phase2,
    Phase3,
}

impl TriadPhase {
    /// Phase for a global step: `(step - 1) mod 3`.
    #[inline]
    pub fn for_step(step: u32) -> Self {
        match (step - 1) % 3 {
            0 => TriadPhase::Phase1,
            1 => TriadPhase::Phase2,
            _ => TriadPhase::Phase3,
        }
    }

    /// 0-based phase index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TriadPhase::Phase1 => 0,
            TriadPhase::Phase2 => 1,
            TriadPhase::Phase3 => 2,
        }
    }
}

/// Pentadic stage (five 6-step stages per cycle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PentadStage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
}

impl PentadStage {
    /// Stage for a global step: `floor((step - 1) / 6)`, clamped to [0, 4].
    ///
    /// The clamp is defensive; for steps in [1, 30] the quotient is already
    /// in range.
    #[inline]
    pub fn for_step(step: u32) -> Self {
        match ((step - 1) / 6).min(4) {
            0 => PentadStage::Stage1,
            1 => PentadStage::Stage2,
            2 => PentadStage::Stage3,
            3 => PentadStage::Stage4,
            _ => PentadStage::Stage5,
        }
    }

    /// 0-based stage index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PentadStage::Stage1 => 0,
            PentadStage::Stage2 => 1,
            PentadStage::Stage3 => 2,
            PentadStage::Stage4 => 3,
            PentadStage::Stage5 => 4,
        }
    }
}

/// Phase of the 4-step fold cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FourStepPhase {
    Step1,
    Step2,
    Step3,
    Step4,
}

impl FourStepPhase {
    /// Phase for a global step: `(step - 1) mod 4`.
    #[inline]
    pub fn for_step(step: u32) -> Self {
        match (step - 1) % 4 {
            0 => FourStepPhase::Step1,
            1 => FourStepPhase::Step2,
            2 => FourStepPhase::Step3,
            _ => FourStepPhase::Step4,
        }
    }
}

/// Step within the current pentadic stage: `(step - 1) mod 6 + 1`, in [1, 6].
#[inline]
pub fn stage_step(step: u32) -> u32 {
    (step - 1) % 6 + 1
}

/// Position of a step within each prime sub-cycle: `(step mod 2, step mod 3, step mod 5)`.
#[inline]
pub fn prime_factors(step: u32) -> (u32, u32, u32) {
    (step % 2, step % 3, step % 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dyad_period_two() {
        for step in 1..=28 {
            assert_eq!(DyadPhase::for_step(step), DyadPhase::for_step(step + 2));
        }
        assert_eq!(DyadPhase::for_step(1), DyadPhase::A);
        assert_eq!(DyadPhase::for_step(2), DyadPhase::B);
    }

    #[test]
    fn test_triad_period_three() {
        for step in 1..=27 {
            assert_eq!(TriadPhase::for_step(step), TriadPhase::for_step(step + 3));
        }
        assert_eq!(TriadPhase::for_step(1), TriadPhase::Phase1);
        assert_eq!(TriadPhase::for_step(3), TriadPhase::Phase3);
    }

    #[test]
    fn test_pentad_stage_boundaries() {
        assert_eq!(PentadStage::for_step(1), PentadStage::Stage1);
        assert_eq!(PentadStage::for_step(6), PentadStage::Stage1);
        assert_eq!(PentadStage::for_step(7), PentadStage::Stage2);
        assert_eq!(PentadStage::for_step(30), PentadStage::Stage5);
    }

    #[test]
    fn test_pentad_stage_non_decreasing() {
        let mut last = PentadStage::Stage1;
        for step in 1..=30 {
            let stage = PentadStage::for_step(step);
            assert!(stage >= last);
            last = stage;
        }
    }

    #[test]
    fn test_stage_step_range() {
        for step in 1..=30 {
            let s = stage_step(step);
            assert!((1..=6).contains(&s));
        }
        assert_eq!(stage_step(1), 1);
        assert_eq!(stage_step(6), 6);
        assert_eq!(stage_step(7), 1);
    }

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(30), (0, 0, 0));
        assert_eq!(prime_factors(7), (1, 1, 2));
    }
}
