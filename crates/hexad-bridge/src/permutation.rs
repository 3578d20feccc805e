//! Rotating thread-pair schedule
//!
//! The four logical threads {1,2,3,4} pair up in all 6 ordered 2-subsets;
//! each pair has two complementary 3-subset sequences running alongside it,
//! offset from each other so the triads never align.

/// The 6 ordered 2-subsets of {1,2,3,4}.
pub const THREAD_PAIRS: [[u32; 2]; 6] = [
    [1, 2],
    [1, 3],
    [1, 4],
    [2, 3],
    [2, 4],
    [3, 4],
];

/// Cyclic sequence of complementary 3-subsets.
pub const TRIAD_SEQ_A: [[u32; 3]; 4] = [
    [1, 2, 3],
    [1, 2, 4],
    [1, 3, 4],
    [2, 3, 4],
];

/// Second triad sequence, offset by two positions from the first.
pub const TRIAD_SEQ_B: [[u32; 3]; 4] = [
    [1, 3, 4],
    [2, 3, 4],
    [1, 2, 3],
    [1, 2, 4],
];

/// Current position in the pairing rotation.
#[derive(Clone, Debug)]
pub struct PermutationSchedule {
    index: usize,
}

impl PermutationSchedule {
    pub fn new() -> Self {
        PermutationSchedule { index: 0 }
    }

    /// Rotate to the next pairing. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % THREAD_PAIRS.len();
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Thread pair at the current position (1-based thread numbers).
    pub fn current_pair(&self) -> [u32; 2] {
        THREAD_PAIRS[self.index]
    }

    /// Triad from the first sequence, indexed mod 4.
    pub fn current_triad_a(&self) -> [u32; 3] {
        TRIAD_SEQ_A[self.index % TRIAD_SEQ_A.len()]
    }

    /// Triad from the second (offset) sequence, indexed mod 4.
    pub fn current_triad_b(&self) -> [u32; 3] {
        TRIAD_SEQ_B[self.index % TRIAD_SEQ_B.len()]
    }
}

impl Default for PermutationSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_period_six() {
        let mut sched = PermutationSchedule::new();
        let start_pair = sched.current_pair();
        for _ in 0..6 {
            sched.advance();
        }
        assert_eq!(sched.index(), 0);
        assert_eq!(sched.current_pair(), start_pair);
    }

    #[test]
    fn test_pairs_cover_all_two_subsets() {
        let mut sched = PermutationSchedule::new();
        let mut seen = vec![sched.current_pair()];
        for _ in 0..5 {
            sched.advance();
            seen.push(sched.current_pair());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_triads_offset_by_two() {
        for i in 0..4 {
            assert_eq!(TRIAD_SEQ_B[i], TRIAD_SEQ_A[(i + 2) % 4]);
        }
    }

    #[test]
    fn test_triads_complement_within_rotation() {
        // Each triad is a 3-subset of {1,2,3,4}: exactly one thread missing.
        for triad in TRIAD_SEQ_A.iter().chain(TRIAD_SEQ_B.iter()) {
            let missing: Vec<u32> = (1..=4).filter(|t| !triad.contains(t)).collect();
            assert_eq!(missing.len(), 1);
        }
    }
}
