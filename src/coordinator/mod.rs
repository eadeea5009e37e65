//! Per-tick sequence coordination
//!
//! Split into one module per backend, same contract, different scope:
//! - `process` - one generator instance, many threads
//! - `file` - many processes, one host
//! - `cluster` - many processes, many hosts
//! - `wait` - spin ladder used when a millisecond's budget is spent

mod cluster;
mod file;
mod process;
mod wait;

use serde::{Deserialize, Serialize};

pub(crate) use cluster::ClusterCoordinator;
#[cfg(test)]
pub(crate) use cluster::sequence_key as cluster_sequence_key;
pub(crate) use file::FileCoordinator;
pub(crate) use process::ProcessCoordinator;

use crate::clock::Clock;
use crate::error::SnowgenError;

/// Last issued (tick, sequence) pair.
///
/// Also the wire form of the state file shared by the file-lock backend;
/// readers must treat an unreadable record as absent, never as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SequenceState {
    pub time: u64,
    pub sequence: u16,
}

/// The coordination backends, one closed set selected at construction
#[derive(Debug)]
pub(crate) enum SequenceCoordinator {
    Process(ProcessCoordinator),
    File(FileCoordinator),
    Cluster(ClusterCoordinator),
}

impl SequenceCoordinator {
    /// Return the (tick, sequence) pair to pack for the observed `tick`.
    ///
    /// No two concurrent callers within the same coordination scope ever
    /// receive the same pair. The returned tick may exceed `tick` when a
    /// throttled millisecond had to be skipped.
    pub fn next(&self, tick: u64, clock: &dyn Clock) -> Result<(u64, u16), SnowgenError> {
        match self {
            Self::Process(c) => c.next(tick, clock),
            Self::File(c) => c.next(tick),
            Self::Cluster(c) => c.next(tick),
        }
    }
}

pub(crate) fn unavailable(err: impl std::fmt::Display) -> SnowgenError {
    SnowgenError::CoordinatorUnavailable {
        reason: err.to_string(),
    }
}
