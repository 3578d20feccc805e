//! The clock bridge
//!
//! Projects the master clock's 30-step position onto the external 12-step
//! consumer clock, nudges the consumer toward the projection, and reports
//! sync quality as two continuous metrics. Collaborators are passed per
//! call; the bridge holds no references and no locks.

use hexad_core::{BridgeEvent, DyadPhase, HexadError, HexadResult, CONSUMER_STEPS};
use hexad_clock::MasterClock;

use crate::{
    map_master_to_consumer, shell_level_for_consumer, ConsumerClock, ConsumerMode, MappingMode,
    PermutationSchedule, SHELL_BOUNDARY_STEPS,
};

/// Bridge configuration
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Which 30 → 12 projection to use.
    pub mapping_mode: MappingMode,
    /// Fraction of the step error corrected per synchronize pass, in [0, 1].
    pub sync_strength: f32,
    /// Run a synchronize pass automatically on every master step.
    pub auto_sync: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            mapping_mode: MappingMode::default(),
            sync_strength: 0.5,
            auto_sync: true,
        }
    }
}

/// Read-only copy of the bridge state.
#[derive(Clone, Debug)]
pub struct BridgeSnapshot {
    pub mapping_mode: MappingMode,
    pub master_step: u32,
    pub consumer_step: u32,
    pub shell_level: u32,
    pub bridge_coherence: f32,
    pub phase_alignment: f32,
    pub permutation_index: usize,
    pub current_pair: [u32; 2],
    pub triad_a: [u32; 3],
    pub triad_b: [u32; 3],
}

/// Bridge between the master clock and a 12-step consumer clock.
pub struct ClockBridge {
    config: BridgeConfig,
    master_step: u32,
    consumer_step: u32,
    shell_level: u32,
    coherence: f32,
    alignment: f32,
    schedule: PermutationSchedule,
    events: Vec<BridgeEvent>,
}

impl ClockBridge {
    /// Create a bridge with default configuration.
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    /// Create a bridge with custom configuration.
    pub fn with_config(config: BridgeConfig) -> Self {
        ClockBridge {
            config,
            master_step: 1,
            consumer_step: 1,
            shell_level: shell_level_for_consumer(1),
            coherence: 1.0,
            alignment: 1.0,
            schedule: PermutationSchedule::new(),
            events: Vec::new(),
        }
    }

    /// Mirror both clocks, track shell transitions, and recompute the two
    /// metrics. Called by the driver once per tick.
    pub fn update<C: ConsumerClock>(
        &mut self,
        master: &MasterClock,
        consumer: &C,
    ) -> HexadResult<()> {
        self.master_step = master.step();
        self.consumer_step = validated_consumer_step(consumer.step())?;

        let old = self.shell_level;
        self.shell_level = shell_level_for_consumer(self.consumer_step);
        if old != self.shell_level {
            self.events.push(BridgeEvent::ShellTransition {
                old,
                new: self.shell_level,
            });
        }

        self.recompute_metrics(master, consumer.mode());
        Ok(())
    }

    /// Event-driven entry point: the driver forwards the master clock's
    /// `StepAdvanced`. Rotates the thread permutation when the consumer sits
    /// on a shell boundary, then synchronizes if `auto_sync` is set.
    pub fn on_master_step_advanced<C: ConsumerClock>(
        &mut self,
        master: &mut MasterClock,
        consumer: &mut C,
        new_step: u32,
    ) -> HexadResult<()> {
        self.master_step = new_step;
        let consumer_step = validated_consumer_step(consumer.step())?;

        if SHELL_BOUNDARY_STEPS.contains(&consumer_step) {
            self.advance_thread_permutation(master)?;
        }

        if self.config.auto_sync {
            self.synchronize(master, consumer)?;
        }
        Ok(())
    }

    /// Nudge the consumer clock toward the mapped master step.
    ///
    /// The consumer moves by `round((expected - actual) * sync_strength)`,
    /// clamped to the ring; its seek is only invoked when the clamped target
    /// actually differs.
    pub fn synchronize<C: ConsumerClock>(
        &mut self,
        master: &MasterClock,
        consumer: &mut C,
    ) -> HexadResult<()> {
        let expected = self.expected_consumer_step(master);
        let actual = validated_consumer_step(consumer.step())?;

        if expected != actual {
            let strength = self.config.sync_strength.clamp(0.0, 1.0);
            let diff = expected as f32 - actual as f32;
            let nudged = actual as i64 + (diff * strength).round() as i64;
            let adjusted = nudged.clamp(1, CONSUMER_STEPS as i64) as u32;

            if adjusted != actual {
                tracing::debug!(from = actual, to = adjusted, expected, "consumer seek");
                consumer.seek(adjusted)?;
            }
        }

        self.master_step = master.step();
        self.consumer_step = consumer.step();
        self.events.push(BridgeEvent::Synced {
            master_step: self.master_step,
            consumer_step: self.consumer_step,
        });
        Ok(())
    }

    /// The consumer step the current mapping assigns to the master's step.
    pub fn expected_consumer_step(&self, master: &MasterClock) -> u32 {
        map_master_to_consumer(self.config.mapping_mode, master.step())
    }

    /// Rotate the pairing schedule and push the new pair into the master
    /// clock's entangled lanes (re-indexed to 0-based).
    pub fn advance_thread_permutation(&mut self, master: &mut MasterClock) -> HexadResult<()> {
        let index = self.schedule.advance();
        let pair = self.schedule.current_pair();
        master.set_active_pair(pair[0] as usize - 1, pair[1] as usize - 1)?;
        self.events.push(BridgeEvent::PermutationAdvanced(index));
        Ok(())
    }

    fn recompute_metrics(&mut self, master: &MasterClock, mode: ConsumerMode) {
        let expected = self.expected_consumer_step(master);
        self.coherence = coherence(expected, self.consumer_step);
        self.alignment = alignment(master.dyad(), master.triad().index(), mode);
    }

    // ---- queries ----

    /// Closeness of the consumer to the mapped master step, in [0, 1].
    pub fn bridge_coherence(&self) -> f32 {
        self.coherence
    }

    /// Heuristic agreement between master phases and consumer mode, in [0, 1].
    pub fn phase_alignment(&self) -> f32 {
        self.alignment
    }

    pub fn shell_level(&self) -> u32 {
        self.shell_level
    }

    pub fn permutation_index(&self) -> usize {
        self.schedule.index()
    }

    pub fn mapping_mode(&self) -> MappingMode {
        self.config.mapping_mode
    }

    /// Owned copy of the full bridge state.
    pub fn snapshot(&self) -> BridgeSnapshot {
        BridgeSnapshot {
            mapping_mode: self.config.mapping_mode,
            master_step: self.master_step,
            consumer_step: self.consumer_step,
            shell_level: self.shell_level,
            bridge_coherence: self.coherence,
            phase_alignment: self.alignment,
            permutation_index: self.schedule.index(),
            current_pair: self.schedule.current_pair(),
            triad_a: self.schedule.current_triad_a(),
            triad_b: self.schedule.current_triad_b(),
        }
    }

    /// Drain all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for ClockBridge {
    fn default() -> Self {
        Self::new()
    }
}

fn validated_consumer_step(step: u32) -> HexadResult<u32> {
    if step < 1 || step > CONSUMER_STEPS {
        return Err(HexadError::ConsumerStepOutOfRange(step));
    }
    Ok(step)
}

/// Circular distance on the 12-ring, scaled into a [0, 1] coherence score.
fn coherence(expected: u32, actual: u32) -> f32 {
    let diff = expected.abs_diff(actual);
    let distance = diff.min(CONSUMER_STEPS - diff);
    (1.0 - distance as f32 / 6.0).clamp(0.0, 1.0)
}

/// Dyad/mode agreement averaged with a triad-graded term.
fn alignment(dyad: DyadPhase, triad_index: usize, mode: ConsumerMode) -> f32 {
    let dyad_alignment = match (dyad, mode) {
        (DyadPhase::A, ConsumerMode::Expressive) | (DyadPhase::B, ConsumerMode::Reflective) => 1.0,
        _ => 0.5,
    };
    let triad_alignment = 0.5 + triad_index as f32 * 0.1;
    (dyad_alignment + triad_alignment) / 2.0
}
