//! Error types for HEXAD
//!
//! The only failure mode is a range violation on an externally supplied
//! step or lane index. All internal arithmetic is total over its domain and
//! internal derived values are clamped, never errored.

use thiserror::Error;

/// Core HEXAD errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexadError {
    #[error("master step out of range: {0} (valid 1..=30)")]
    MasterStepOutOfRange(u32),

    #[error("consumer step out of range: {0} (valid 1..=12)")]
    ConsumerStepOutOfRange(u32),

    #[error("concurrency lane out of range: {0} (valid 0..=7)")]
    LaneOutOfRange(usize),
}

/// Result type for HEXAD operations
pub type HexadResult<T> = Result<T, HexadError>;
