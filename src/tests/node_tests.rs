use std::env;
use std::sync::Mutex;

use crate::{resolve_node_id, Snowgen, SnowgenError, MAX_NODE_ID, NODE_ID_ENV};

// the override tests mutate process-wide environment state
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_env<T>(value: Option<&str>, body: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap();
    match value {
        Some(value) => env::set_var(NODE_ID_ENV, value),
        None => env::remove_var(NODE_ID_ENV),
    }
    let result = body();
    env::remove_var(NODE_ID_ENV);
    result
}

#[test]
fn test_explicit_node_id_in_range() {
    assert_eq!(resolve_node_id(Some(500)).unwrap(), 500);
    assert_eq!(resolve_node_id(Some(0)).unwrap(), 0);
    assert_eq!(resolve_node_id(Some(MAX_NODE_ID)).unwrap(), MAX_NODE_ID);
}

#[test]
fn test_explicit_node_id_out_of_range() {
    let err = resolve_node_id(Some(1024)).unwrap_err();
    assert_eq!(
        err,
        SnowgenError::NodeIdOutOfRange {
            value: 1024,
            max: MAX_NODE_ID
        }
    );
}

#[test]
fn test_explicit_node_id_round_trips_through_an_id() {
    let generator = Snowgen::new(500).unwrap();
    let id = generator.generate().unwrap();
    let (_, node_id, _) = generator.decompose(id);
    assert_eq!(node_id, 500);
}

#[test]
fn test_override_is_validated_not_masked() {
    // 1024 & 0x3FF would alias to node 0; it must be rejected instead
    let err = with_env(Some("1024"), || resolve_node_id(None)).unwrap_err();
    assert_eq!(
        err,
        SnowgenError::NodeIdOutOfRange {
            value: 1024,
            max: MAX_NODE_ID
        }
    );
}

#[test]
fn test_negative_override_is_rejected() {
    let err = with_env(Some("-1"), || resolve_node_id(None)).unwrap_err();
    assert_eq!(
        err,
        SnowgenError::NodeIdOutOfRange {
            value: -1,
            max: MAX_NODE_ID
        }
    );
}

#[test]
fn test_non_integer_override_is_rejected() {
    let err = with_env(Some("two"), || resolve_node_id(None)).unwrap_err();
    assert!(matches!(err, SnowgenError::NodeIdOverrideInvalid { .. }));
}

#[test]
fn test_valid_override_wins_over_derivation() {
    let node_id = with_env(Some("77"), || resolve_node_id(None)).unwrap();
    assert_eq!(node_id, 77);
}

#[test]
fn test_explicit_value_wins_over_override() {
    let node_id = with_env(Some("77"), || resolve_node_id(Some(12))).unwrap();
    assert_eq!(node_id, 12);
}

#[test]
fn test_derived_node_id_fits_ten_bits() {
    let node_id = with_env(None, || resolve_node_id(None)).unwrap();
    assert!(node_id <= MAX_NODE_ID);
}
