//! 30 → 12 step mapping strategies
//!
//! All three mappings take a validated master step in [1, 30] and return a
//! consumer step in [1, 12]. Internal intermediate values are clamped
//! defensively; the input itself is validated by the bridge before dispatch.

use hexad_core::{stage_step, CONSUMER_STEPS, CYCLE_STEPS};

/// Strategy for projecting the master step onto the consumer ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingMode {
    /// Plain modular compression: `floor((step-1) * 12 / 30) + 1`.
    Direct,
    /// Stage-aware: active stage-steps walk the consumer ring, transition
    /// steps hold at the stage boundary.
    Interleaved,
    /// Nested-shell mapping approximating restricted-rooted-tree growth.
    Hierarchical,
}

impl Default for MappingMode {
    fn default() -> Self {
        MappingMode::Hierarchical
    }
}

/// One nesting level of the hierarchical mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shell {
    pub nesting_level: u32,
    /// Master steps spanned by this shell.
    pub term_count: u32,
    /// Consumer-step spacing within this shell.
    pub steps_apart: u32,
}

/// Fixed shell table. Term counts 1, 2, 4, 9 approximate rooted-tree growth;
/// cumulative ranges are [1], [2,3], [4,7], [8,16], with everything past 16
/// falling back to the last shell.
pub const SHELL_TABLE: [Shell; 4] = [
    Shell { nesting_level: 1, term_count: 1, steps_apart: 1 },
    Shell { nesting_level: 2, term_count: 2, steps_apart: 2 },
    Shell { nesting_level: 3, term_count: 4, steps_apart: 3 },
    Shell { nesting_level: 4, term_count: 9, steps_apart: 4 },
];

/// Consumer steps at which the bridge rotates the thread permutation:
/// the cumulative shell boundaries plus the ring end.
pub const SHELL_BOUNDARY_STEPS: [u32; 4] = [1, 3, 7, 12];

/// Map a master step in [1, 30] to a consumer step in [1, 12].
pub fn map_master_to_consumer(mode: MappingMode, step: u32) -> u32 {
    match mode {
        MappingMode::Direct => direct_mapping(step),
        MappingMode::Interleaved => interleaved_mapping(step),
        MappingMode::Hierarchical => hierarchical_mapping(step),
    }
}

fn direct_mapping(step: u32) -> u32 {
    (step - 1) * CONSUMER_STEPS / CYCLE_STEPS + 1
}

fn interleaved_mapping(step: u32) -> u32 {
    let stage = (step - 1) / 6;
    let stage_step = stage_step(step);

    if stage_step <= 4 {
        // Active step: each stage contributes two consumer steps.
        let base = stage * 2 + 1;
        let offset = (stage_step - 1) / 2;
        (base + offset).clamp(1, CONSUMER_STEPS)
    } else {
        // Transition step: hold at the stage boundary.
        (stage * 2 + 2).clamp(1, CONSUMER_STEPS)
    }
}

fn hierarchical_mapping(step: u32) -> u32 {
    // Locate the shell whose cumulative term-count range contains the step.
    let mut offset = 0;
    let mut shell = SHELL_TABLE[SHELL_TABLE.len() - 1];
    let mut shell_offset = cumulative_offset(SHELL_TABLE.len() - 1);

    for candidate in &SHELL_TABLE {
        if step <= offset + candidate.term_count {
            shell = *candidate;
            shell_offset = offset;
            break;
        }
        offset += candidate.term_count;
    }
    // Steps past the table (17..=30) stay in the last shell.

    let step_within_shell = step - shell_offset;
    let consumer = (step_within_shell - 1) * shell.steps_apart % CONSUMER_STEPS + 1;
    consumer.clamp(1, CONSUMER_STEPS)
}

/// Inverse projection: first master step associated with a consumer step,
/// using the consumer step's shell spacing.
pub fn map_consumer_to_master(consumer_step: u32) -> u32 {
    let level = shell_level_for_consumer(consumer_step) as usize;
    let shell = SHELL_TABLE[level - 1];
    (consumer_step - 1) * shell.steps_apart % CYCLE_STEPS + 1
}

/// Shell level for a consumer step, via the cyclic grouping
/// {1,5,9} → 1, {2,6,10} → 2, {3,7,11} → 3, {4,8,12} → 4.
pub fn shell_level_for_consumer(consumer_step: u32) -> u32 {
    (consumer_step - 1) % 4 + 1
}

fn cumulative_offset(shell_index: usize) -> u32 {
    SHELL_TABLE[..shell_index].iter().map(|s| s.term_count).sum()
}
