use crate::coordinator::ProcessCoordinator;
use crate::tests::test_utils::ManualClock;
use crate::{SnowgenError, MAX_SEQUENCE};

const TICK: u64 = 1_750_000_000_000;

fn coordinator() -> ProcessCoordinator {
    ProcessCoordinator::new(64, 16)
}

#[test]
fn test_sequence_increments_within_one_tick() {
    let clock = ManualClock::new(TICK);
    let coordinator = coordinator();

    for expected in 0..10 {
        let (tick, sequence) = coordinator.next(TICK, &clock).unwrap();
        assert_eq!(tick, TICK);
        assert_eq!(sequence, expected);
    }
}

#[test]
fn test_sequence_resets_when_tick_advances() {
    let clock = ManualClock::new(TICK);
    let coordinator = coordinator();

    let (_, first) = coordinator.next(TICK, &clock).unwrap();
    let (tick, second) = coordinator.next(TICK + 5, &clock).unwrap();

    assert_eq!(first, 0);
    assert_eq!(tick, TICK + 5);
    assert_eq!(second, 0);
}

#[test]
fn test_fresh_ticks_both_report_sequence_zero() {
    let clock = ManualClock::new(TICK);
    let coordinator = coordinator();

    let (_, a) = coordinator.next(TICK, &clock).unwrap();
    let (_, b) = coordinator.next(TICK + 1, &clock).unwrap();
    assert_eq!((a, b), (0, 0));
}

#[test]
fn test_clock_rollback_is_detected() {
    let clock = ManualClock::new(TICK);
    let coordinator = coordinator();

    coordinator.next(TICK, &clock).unwrap();
    let err = coordinator.next(TICK - 3, &clock).unwrap_err();
    assert_eq!(err, SnowgenError::ClockMovedBackwards { delta: 3 });

    // the fault must not have issued or recorded anything for the stale tick
    let (tick, sequence) = coordinator.next(TICK, &clock).unwrap();
    assert_eq!(tick, TICK);
    assert_eq!(sequence, 1);
}

#[test]
fn test_exhausted_tick_advances_to_the_next_one() {
    // stays at TICK long enough to drain the budget, then steps forward
    let clock = ManualClock::advancing_after(TICK, 8);
    let coordinator = coordinator();

    for expected in 0..=MAX_SEQUENCE {
        let (tick, sequence) = coordinator.next(TICK, &clock).unwrap();
        assert_eq!(tick, TICK);
        assert_eq!(sequence, expected);
    }

    // budget spent: the coordinator must wait out the millisecond and
    // restart at sequence 0 on a strictly later tick
    let (tick, sequence) = coordinator.next(TICK, &clock).unwrap();
    assert!(tick > TICK);
    assert_eq!(sequence, 0);
}

#[test]
fn test_sequence_never_exceeds_mask() {
    let clock = ManualClock::advancing_after(TICK, 8);
    let coordinator = coordinator();

    // follow the coordinator across the exhaustion boundary by feeding the
    // returned tick back in
    let mut tick = TICK;
    for _ in 0..=u32::from(MAX_SEQUENCE) + 10 {
        let (advanced, sequence) = coordinator.next(tick, &clock).unwrap();
        tick = advanced;
        assert!(sequence <= MAX_SEQUENCE);
    }
}
