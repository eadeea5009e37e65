//! Single-host backend: independent processes serialized by a file lock
//!
//! The last issued (tick, sequence) pair lives in a small JSON state file.
//! Every read-modify-write is bracketed by an exclusive advisory lock on a
//! dedicated lock file, so any number of processes on one host coordinate
//! through the filesystem.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::codec::MAX_SEQUENCE;
use crate::error::SnowgenError;

use super::{unavailable, SequenceState};

const STATE_FILE: &str = "snowgen.state.json";
const LOCK_FILE: &str = "snowgen.state.lock";

#[derive(Debug)]
pub(crate) struct FileCoordinator {
    state_path: PathBuf,
    lock_path: PathBuf,
}

impl FileCoordinator {
    /// `dir` defaults to the OS temp directory
    pub fn new(dir: Option<PathBuf>) -> Self {
        let dir = dir.unwrap_or_else(std::env::temp_dir);
        Self {
            state_path: dir.join(STATE_FILE),
            lock_path: dir.join(LOCK_FILE),
        }
    }

    pub fn next(&self, tick: u64) -> Result<(u64, u16), SnowgenError> {
        let lock = self.acquire_lock()?;
        let result = self.advance(tick);
        // closing the handle releases the advisory lock
        drop(lock);
        result
    }

    fn acquire_lock(&self) -> Result<File, SnowgenError> {
        let lock = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(unavailable)?;
        lock.lock_exclusive().map_err(unavailable)?;
        Ok(lock)
    }

    /// The decision mirrors the in-process backend, minus the busy-wait:
    /// a spent millisecond wraps the masked sequence.
    fn advance(&self, tick: u64) -> Result<(u64, u16), SnowgenError> {
        let decided = match read_state(&self.state_path) {
            Some(last) if tick < last.time => {
                return Err(SnowgenError::ClockMovedBackwards {
                    delta: last.time - tick,
                });
            }
            Some(last) if tick == last.time => SequenceState {
                time: tick,
                sequence: (last.sequence + 1) & MAX_SEQUENCE,
            },
            _ => SequenceState { time: tick, sequence: 0 },
        };
        let body = serde_json::to_vec(&decided).map_err(unavailable)?;
        fs::write(&self.state_path, body).map_err(unavailable)?;
        Ok((decided.time, decided.sequence))
    }
}

/// A missing or malformed state file reads as no prior state; the sequence
/// restarts at 0 for the caller's tick.
fn read_state(path: &Path) -> Option<SequenceState> {
    let raw = fs::read(path).ok()?;
    match serde_json::from_slice(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "discarding unreadable sequence state");
            None
        }
    }
}
