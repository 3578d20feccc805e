//! Lane weight vectors driven by the dyadic and triadic sub-cycles
//!
//! The "8 lanes" and "9 lanes" are weighted scalars, not execution units.
//! Each tick refreshes the active lanes to full weight and decays the rest
//! multiplicatively, so weights persist and fade across many ticks instead
//! of being zeroed. This is the only path-dependent state in the system:
//! jumping the clock does not replay the decay of the skipped ticks.

use hexad_core::{
    DyadPhase, HexadError, HexadResult, TriadPhase, CONCURRENCY_LANES, CONVOLUTION_LANES,
};

/// 8-lane concurrency vector (2³ delegated into parallel weight state).
#[derive(Clone, Debug)]
pub struct ConcurrencyVector {
    lanes: [f32; CONCURRENCY_LANES],
    active_pair: [usize; 2],
    entanglement: f32,
}

impl ConcurrencyVector {
    pub fn new() -> Self {
        ConcurrencyVector {
            lanes: [0.0; CONCURRENCY_LANES],
            active_pair: [0, 1],
            entanglement: 0.0,
        }
    }

    /// Refresh the half selected by the dyad to 1.0 and decay the other half.
    ///
    /// Phase A activates lanes 0..4, phase B lanes 4..8. The entanglement
    /// level is recomputed as the product of the two active-pair weights.
    pub fn delegate(&mut self, dyad: DyadPhase, decay: f32) {
        let active = match dyad {
            DyadPhase::A => 0..4,
            DyadPhase::B => 4..8,
        };
        for (i, lane) in self.lanes.iter_mut().enumerate() {
            if active.contains(&i) {
                *lane = 1.0;
            } else {
                *lane *= decay;
            }
        }
        self.recompute_entanglement();
    }

    /// Set the entangled lane pair. Lanes are 0-based indices into the 8 lanes.
    pub fn set_active_pair(&mut self, a: usize, b: usize) -> HexadResult<()> {
        if a >= CONCURRENCY_LANES {
            return Err(HexadError::LaneOutOfRange(a));
        }
        if b >= CONCURRENCY_LANES {
            return Err(HexadError::LaneOutOfRange(b));
        }
        self.active_pair = [a, b];
        self.recompute_entanglement();
        Ok(())
    }

    /// Scale an input vector by the lane weights, cycling over the 8 lanes.
    pub fn process(&self, values: &[f32]) -> Vec<f32> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| v * self.lanes[i % CONCURRENCY_LANES])
            .collect()
    }

    pub fn lanes(&self) -> &[f32; CONCURRENCY_LANES] {
        &self.lanes
    }

    pub fn active_pair(&self) -> [usize; 2] {
        self.active_pair
    }

    /// Product of the two active-pair lane weights.
    pub fn entanglement(&self) -> f32 {
        self.entanglement
    }

    fn recompute_entanglement(&mut self) {
        self.entanglement = self.lanes[self.active_pair[0]] * self.lanes[self.active_pair[1]];
    }
}

impl Default for ConcurrencyVector {
    fn default() -> Self {
        Self::new()
    }
}

/// 9-lane convolution vector (3² delegated into orthogonal phase weights).
#[derive(Clone, Debug)]
pub struct ConvolutionVector {
    lanes: [f32; CONVOLUTION_LANES],
    kernel: usize,
    rotation: f32,
}

impl ConvolutionVector {
    pub fn new() -> Self {
        ConvolutionVector {
            lanes: [0.0; CONVOLUTION_LANES],
            kernel: 0,
            rotation: 0.0,
        }
    }

    /// Refresh the 3 lanes selected by the triad and decay the other 6.
    ///
    /// Triad phase k activates lanes 3k..3k+3, sets the kernel to 3k, and
    /// rotates the phase angle to k·120°.
    pub fn delegate(&mut self, triad: TriadPhase, decay: f32) {
        let base = triad.index() * 3;
        for (i, lane) in self.lanes.iter_mut().enumerate() {
            if (base..base + 3).contains(&i) {
                *lane = 1.0;
            } else {
                *lane *= decay;
            }
        }
        self.kernel = base;
        self.rotation = triad.index() as f32 * 120.0;
    }

    /// Scale an input vector by the lane weights, starting at the current
    /// kernel and cycling over the 9 lanes.
    pub fn process(&self, values: &[f32]) -> Vec<f32> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| v * self.lanes[(self.kernel + i) % CONVOLUTION_LANES])
            .collect()
    }

    pub fn lanes(&self) -> &[f32; CONVOLUTION_LANES] {
        &self.lanes
    }

    /// Current kernel index in [0, 8].
    pub fn kernel(&self) -> usize {
        self.kernel
    }

    /// Phase rotation angle in [0, 360).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

impl Default for ConvolutionVector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrency_delegate_halves() {
        let mut v = ConcurrencyVector::new();
        v.delegate(DyadPhase::A, 0.9);
        assert!(v.lanes()[..4].iter().all(|&w| w == 1.0));
        assert!(v.lanes()[4..].iter().all(|&w| w == 0.0));

        v.delegate(DyadPhase::B, 0.9);
        assert!(v.lanes()[4..].iter().all(|&w| w == 1.0));
        // Previously active half decays, not zeroes.
        assert!(v.lanes()[..4].iter().all(|&w| (w - 0.9).abs() < 1e-6));
    }

    #[test]
    fn test_concurrency_decay_persists() {
        let mut v = ConcurrencyVector::new();
        v.delegate(DyadPhase::A, 0.9);
        for _ in 0..5 {
            v.delegate(DyadPhase::B, 0.9);
        }
        let expected = 0.9f32.powi(5);
        assert!((v.lanes()[0] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_entanglement_is_pair_product() {
        let mut v = ConcurrencyVector::new();
        v.delegate(DyadPhase::A, 0.9);
        v.set_active_pair(0, 4).unwrap();
        v.delegate(DyadPhase::A, 0.9);
        // lane 0 = 1.0, lane 4 decayed twice from 0.0 -> still 0.0
        assert_eq!(v.entanglement(), 0.0);

        v.delegate(DyadPhase::B, 0.9);
        // lane 0 = 0.9, lane 4 = 1.0
        assert!((v.entanglement() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_set_active_pair_rejects_bad_lane() {
        let mut v = ConcurrencyVector::new();
        assert_eq!(
            v.set_active_pair(0, 8),
            Err(HexadError::LaneOutOfRange(8))
        );
        assert_eq!(v.active_pair(), [0, 1]);
    }

    #[test]
    fn test_convolution_delegate_window() {
        let mut v = ConvolutionVector::new();
        v.delegate(TriadPhase::Phase2, 0.9);
        assert_eq!(v.kernel(), 3);
        assert!((v.rotation() - 120.0).abs() < 1e-6);
        assert!(v.lanes()[3..6].iter().all(|&w| w == 1.0));
        assert!(v.lanes()[..3].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_process_scales_by_weights() {
        let mut v = ConcurrencyVector::new();
        v.delegate(DyadPhase::A, 0.9);
        let out = v.process(&[2.0; 8]);
        assert_eq!(out[..4], [2.0, 2.0, 2.0, 2.0]);
        assert_eq!(out[4..], [0.0, 0.0, 0.0, 0.0]);

        // Inputs longer than the lane count wrap.
        let out = v.process(&[1.0; 10]);
        assert_eq!(out.len(), 10);
        assert_eq!(out[8], 1.0);
    }

    #[test]
    fn test_convolution_process_offset_by_kernel() {
        let mut v = ConvolutionVector::new();
        v.delegate(TriadPhase::Phase3, 0.9);
        assert_eq!(v.kernel(), 6);
        let out = v.process(&[1.0; 9]);
        // Elements 0..3 hit lanes 6..9 (active), 3..6 hit lanes 0..3 (cold).
        assert_eq!(out[..3], [1.0, 1.0, 1.0]);
        assert_eq!(out[3..6], [0.0, 0.0, 0.0]);
    }
}
