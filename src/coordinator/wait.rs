//! Spin and sleep strategy for waiting until the next millisecond

use std::thread;
use std::time::Duration;

use crate::clock::Clock;

const SLEEP_STEP: Duration = Duration::from_micros(50);

/// Return the first clock reading strictly after `tick`.
///
/// Spins for up to `spin_loops` iterations, yielding every `yield_every`
/// of them, then falls back to short sleeps. Bounded by real clock
/// advancement, typically under a millisecond.
pub(super) fn wait_until_after(
    tick: u64,
    spin_loops: u32,
    yield_every: u32,
    clock: &dyn Clock,
) -> u64 {
    for i in 0..spin_loops {
        let now = clock.now_millis();
        if now > tick {
            return now;
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    loop {
        thread::sleep(SLEEP_STEP);
        let now = clock.now_millis();
        if now > tick {
            return now;
        }
    }
}
