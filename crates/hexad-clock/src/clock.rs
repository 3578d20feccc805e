//! The 30-step master clock
//!
//! The global step is the only true state; every phase field is recomputed
//! from it by the pipeline. The two lane vectors carry memory across ticks
//! (decay is path-dependent), which is why jumping is deliberately not
//! equivalent to replaying the intermediate ticks.

use hexad_core::{
    stage_step, ClockEvent, DyadPhase, FoldState, FourStepPhase, HexadError, HexadResult,
    PentadStage, SyncKind, TriadPhase, CYCLE_STEPS, LANE_DECAY,
};

use crate::{ConcurrencyVector, ConvolutionVector};

/// Master clock configuration
#[derive(Clone, Debug)]
pub struct ClockConfig {
    /// Per-tick decay applied to unrefreshed lane weights.
    pub lane_decay: f32,
    /// When true, `jump_to_step` emits no boundary events and leaves
    /// `sync_event_count` untouched (including the stage-scheduler
    /// increment). When false, jumps run boundary detection identically to
    /// `advance`. The source code shares one code path for both, so false
    /// is the default.
    pub silent_jumps: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            lane_decay: LANE_DECAY,
            silent_jumps: false,
        }
    }
}

/// Read-only copy of the full clock state.
#[derive(Clone, Debug)]
pub struct ClockSnapshot {
    pub step: u32,
    pub dyad: DyadPhase,
    pub triad: TriadPhase,
    pub stage: PentadStage,
    pub stage_step: u32,
    pub four_step: FourStepPhase,
    pub fold: FoldState,
    pub concurrency_lanes: [f32; 8],
    pub active_pair: [usize; 2],
    pub entanglement: f32,
    pub convolution_lanes: [f32; 9],
    pub kernel: usize,
    pub rotation: f32,
    pub cycle_count: u32,
    pub sync_event_count: u32,
    pub paused: bool,
}

/// The composite master clock.
pub struct MasterClock {
    config: ClockConfig,
    step: u32,
    dyad: DyadPhase,
    triad: TriadPhase,
    stage: PentadStage,
    stage_step: u32,
    four_step: FourStepPhase,
    fold: FoldState,
    concurrency: ConcurrencyVector,
    convolution: ConvolutionVector,
    cycle_count: u32,
    sync_event_count: u32,
    paused: bool,
    events: Vec<ClockEvent>,
}

impl MasterClock {
    /// Create a clock at step 1 with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClockConfig::default())
    }

    /// Create a clock at step 1 with custom configuration.
    pub fn with_config(config: ClockConfig) -> Self {
        let mut clock = MasterClock {
            config,
            step: 1,
            dyad: DyadPhase::A,
            triad: TriadPhase::Phase1,
            stage: PentadStage::Stage1,
            stage_step: 1,
            four_step: FourStepPhase::Step1,
            fold: FoldState::default(),
            concurrency: ConcurrencyVector::new(),
            convolution: ConvolutionVector::new(),
            cycle_count: 0,
            sync_event_count: 0,
            paused: false,
            events: Vec::new(),
        };
        // Bring the vectors in line with step 1; initialization is not an
        // observable tick, so the queue is cleared afterwards.
        clock.run_pipeline(false);
        clock.events.clear();
        clock
    }

    /// Advance one step around the 30-step ring. No-op while paused.
    ///
    /// On the 30 → 1 wrap the cycle count increments, the sync event count
    /// resets, and a `CycleCompleted` event fires.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }

        let old = self.step;
        self.step = self.step % CYCLE_STEPS + 1;

        if old == CYCLE_STEPS {
            self.cycle_count += 1;
            self.sync_event_count = 0;
            tracing::debug!(cycle = self.cycle_count, "master cycle completed");
            self.events.push(ClockEvent::CycleCompleted(self.cycle_count));
        }

        self.run_pipeline(true);
        self.events.push(ClockEvent::StepAdvanced {
            old,
            new: self.step,
        });
        self.detect_boundaries(true);
    }

    /// Advance N steps. Respects pause like `advance`.
    pub fn advance_steps(&mut self, count: u32) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Seek directly to a step in [1, 30].
    ///
    /// The decaying vectors keep whatever weights they currently hold;
    /// seeking does not replay the skipped ticks. The cycle count is not
    /// touched. Works while paused (an explicit seek is not an advance).
    pub fn jump_to_step(&mut self, step: u32) -> HexadResult<()> {
        if step < 1 || step > CYCLE_STEPS {
            return Err(HexadError::MasterStepOutOfRange(step));
        }

        let old = self.step;
        self.step = step;
        tracing::trace!(from = old, to = step, "jump");

        let audible = !self.config.silent_jumps;
        self.run_pipeline(audible);
        self.events.push(ClockEvent::StepAdvanced { old, new: step });
        if audible {
            self.detect_boundaries(true);
        }
        Ok(())
    }

    /// Stop `advance` from having effect until `resume`.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Reinitialize everything to the step-1 state: vectors, counters, and
    /// the event queue included.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
    }

    /// The five-stage composite pipeline. Order is load-bearing: each stage
    /// consumes the previous stage's output.
    fn run_pipeline(&mut self, count_sync: bool) {
        let dyad = DyadPhase::for_step(self.step);
        let triad = TriadPhase::for_step(self.step);

        // 1. Delegate-dyadic: refresh/decay the 8 concurrency lanes.
        self.concurrency.delegate(dyad, self.config.lane_decay);

        // 2. Delegate-triadic: refresh/decay the 9 convolution lanes,
        //    rotate the kernel.
        self.convolution.delegate(triad, self.config.lane_decay);

        // 3. Synchronizer: commit the pure projections and report changes.
        if self.dyad != dyad {
            self.events.push(ClockEvent::DyadChanged {
                old: self.dyad,
                new: dyad,
            });
            self.dyad = dyad;
        }
        if self.triad != triad {
            self.events.push(ClockEvent::TriadChanged {
                old: self.triad,
                new: triad,
            });
            self.triad = triad;
        }
        let stage = PentadStage::for_step(self.step);
        if self.stage != stage {
            self.events.push(ClockEvent::StageChanged {
                old: self.stage,
                new: stage,
            });
            self.stage = stage;
        }
        self.stage_step = stage_step(self.step);

        // 4. Fold: 2×3→4 table lookup from the four-step phase.
        self.four_step = FourStepPhase::for_step(self.step);
        self.fold = FoldState::for_phase(self.four_step);

        // 5. Stage scheduler: stage-steps 5 and 6 are transition steps.
        if count_sync && self.stage_step >= 5 {
            self.sync_event_count += 1;
        }
    }

    /// Evaluate the independent boundary conditions for the current step and
    /// emit one event per true condition, plus the pairwise coincidences and
    /// the full-cycle event at step 30.
    ///
    /// Only the base conditions and the full cycle bump `sync_event_count`;
    /// coincidence events never double-count.
    fn detect_boundaries(&mut self, count: bool) {
        let t = self.step;
        let dyad = t % 2 == 0;
        let triad = t % 3 == 0;
        let pentad = t % 6 == 0;

        if dyad {
            self.events.push(ClockEvent::SyncBoundary(SyncKind::Dyad));
            if count {
                self.sync_event_count += 1;
            }
        }
        if triad {
            self.events.push(ClockEvent::SyncBoundary(SyncKind::Triad));
            if count {
                self.sync_event_count += 1;
            }
        }
        if pentad {
            self.events.push(ClockEvent::SyncBoundary(SyncKind::Pentad));
            if count {
                self.sync_event_count += 1;
            }
        }
        if dyad && triad {
            self.events
                .push(ClockEvent::SyncBoundary(SyncKind::DyadTriad));
        }
        if dyad && pentad {
            self.events
                .push(ClockEvent::SyncBoundary(SyncKind::DyadPentad));
        }
        if triad && pentad {
            self.events
                .push(ClockEvent::SyncBoundary(SyncKind::TriadPentad));
        }
        if t == CYCLE_STEPS {
            self.events
                .push(ClockEvent::SyncBoundary(SyncKind::FullCycle));
            if count {
                self.sync_event_count += 1;
            }
        }
    }

    // ---- queries ----

    /// Current global step in [1, 30].
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn dyad(&self) -> DyadPhase {
        self.dyad
    }

    pub fn triad(&self) -> TriadPhase {
        self.triad
    }

    pub fn stage(&self) -> PentadStage {
        self.stage
    }

    /// Step within the current 6-step stage, in [1, 6].
    pub fn stage_step(&self) -> u32 {
        self.stage_step
    }

    pub fn four_step(&self) -> FourStepPhase {
        self.four_step
    }

    pub fn fold(&self) -> FoldState {
        self.fold
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Sync events seen so far this cycle (reset on each 30 → 1 wrap).
    pub fn sync_event_count(&self) -> u32 {
        self.sync_event_count
    }

    pub fn entanglement(&self) -> f32 {
        self.concurrency.entanglement()
    }

    pub fn active_pair(&self) -> [usize; 2] {
        self.concurrency.active_pair()
    }

    /// Set the entangled lane pair (0-based lanes). Written by the bridge's
    /// permutation rotation; the clock only reads it back for entanglement.
    pub fn set_active_pair(&mut self, a: usize, b: usize) -> HexadResult<()> {
        self.concurrency.set_active_pair(a, b)
    }

    /// Whether the current step sits on any sync boundary.
    pub fn is_at_sync_boundary(&self) -> bool {
        self.step % 2 == 0 || self.step % 3 == 0
    }

    /// The base boundary kinds true at the current step.
    pub fn sync_boundary_kinds(&self) -> Vec<SyncKind> {
        let mut kinds = Vec::new();
        if self.step % 2 == 0 {
            kinds.push(SyncKind::Dyad);
        }
        if self.step % 3 == 0 {
            kinds.push(SyncKind::Triad);
        }
        if self.step % 6 == 0 {
            kinds.push(SyncKind::Pentad);
        }
        if self.step == CYCLE_STEPS {
            kinds.push(SyncKind::FullCycle);
        }
        kinds
    }

    /// Owned copy of the full state. Never a live reference; the clock stays
    /// the single writer.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            step: self.step,
            dyad: self.dyad,
            triad: self.triad,
            stage: self.stage,
            stage_step: self.stage_step,
            four_step: self.four_step,
            fold: self.fold,
            concurrency_lanes: *self.concurrency.lanes(),
            active_pair: self.concurrency.active_pair(),
            entanglement: self.concurrency.entanglement(),
            convolution_lanes: *self.convolution.lanes(),
            kernel: self.convolution.kernel(),
            rotation: self.convolution.rotation(),
            cycle_count: self.cycle_count,
            sync_event_count: self.sync_event_count,
            paused: self.paused,
        }
    }

    /// Scale an input vector by the current concurrency lane weights.
    pub fn process_concurrency(&self, values: &[f32]) -> Vec<f32> {
        self.concurrency.process(values)
    }

    /// Scale an input vector by the current convolution lane weights.
    pub fn process_convolution(&self, values: &[f32]) -> Vec<f32> {
        self.convolution.process(values)
    }

    /// Drain all events queued since the last drain. The driver polls this
    /// after each `advance`/`jump_to_step`; events fire in bursts within a
    /// single tick.
    pub fn drain_events(&mut self) -> Vec<ClockEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for MasterClock {
    fn default() -> Self {
        Self::new()
    }
}
