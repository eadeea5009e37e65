use thiserror::Error;

/// Represents errors that can occur while configuring a generator or
/// issuing an id
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowgenError {
    /// Error when an explicit or overridden node id falls outside the
    /// 10-bit range
    #[error("node id {value} is invalid, allowed range is 0..={max}")]
    NodeIdOutOfRange { value: i64, max: u16 },
    /// Error when the node id override is not an integer
    #[error("node id override {value:?} is not an integer")]
    NodeIdOverrideInvalid { value: String },
    /// Error when observed time moves behind the last issued tick
    #[error("clock moved backwards, refusing to issue an id for {delta} ms")]
    ClockMovedBackwards { delta: u64 },
    /// Error when a timestamp cannot be represented in the 41-bit field
    #[error("timestamp {tick} ms is not representable with epoch {epoch}")]
    TimestampOutOfRange { tick: u64, epoch: u64 },
    /// Error when the selected coordination backend cannot serve the call
    #[error("sequence coordinator unavailable: {reason}")]
    CoordinatorUnavailable { reason: String },
    /// Error when another caller panicked while holding the sequence lock
    #[error("sequence state lock poisoned")]
    LockPoisoned,
    /// Error when an id string is not a decimal 64-bit value
    #[error("{value:?} is not a decimal snowflake id")]
    MalformedId { value: String },
}
