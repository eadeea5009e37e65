//! In-process backend: one generator instance, many threads
//!
//! State is the last issued (tick, sequence) pair behind a mutex held for
//! the whole read-decide-write, never across I/O.

use std::sync::Mutex;

use crate::clock::Clock;
use crate::codec::MAX_SEQUENCE;
use crate::error::SnowgenError;

use super::wait::wait_until_after;
use super::SequenceState;

#[derive(Debug)]
pub(crate) struct ProcessCoordinator {
    state: Mutex<Option<SequenceState>>,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl ProcessCoordinator {
    pub fn new(spin_loops: u32, spin_yield_every: u32) -> Self {
        Self {
            state: Mutex::new(None),
            spin_loops,
            spin_yield_every,
        }
    }

    pub fn next(&self, tick: u64, clock: &dyn Clock) -> Result<(u64, u16), SnowgenError> {
        let mut state = self.state.lock().map_err(|_| SnowgenError::LockPoisoned)?;
        let decided = match *state {
            Some(last) if tick < last.time => {
                // a rolled-back clock must not reuse the last tick
                return Err(SnowgenError::ClockMovedBackwards {
                    delta: last.time - tick,
                });
            }
            Some(last) if tick == last.time => {
                let sequence = (last.sequence + 1) & MAX_SEQUENCE;
                if sequence == 0 {
                    // 4096 ids issued in this millisecond, wait out the
                    // remainder of it
                    let tick =
                        wait_until_after(last.time, self.spin_loops, self.spin_yield_every, clock);
                    SequenceState { time: tick, sequence: 0 }
                } else {
                    SequenceState { time: tick, sequence }
                }
            }
            _ => SequenceState { time: tick, sequence: 0 },
        };
        *state = Some(decided);
        Ok((decided.time, decided.sequence))
    }
}
