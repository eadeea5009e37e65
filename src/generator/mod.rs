//! The generator facade
//!
//! Composes the clock, the node id, the sequence coordinator and the codec
//! into `generate()`/`parse()`.

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::codec::IdCodec;
use crate::config::{Coordination, SnowgenConfig};
use crate::coordinator::{
    ClusterCoordinator, FileCoordinator, ProcessCoordinator, SequenceCoordinator,
};
use crate::error::SnowgenError;
use crate::node::resolve_node_id;

/// Decoded view of one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedId {
    /// Wall-clock milliseconds since the Unix epoch
    pub timestamp: u64,
    /// `timestamp` rendered as UTC calendar time
    pub datetime: String,
    pub node_id: u16,
    pub sequence: u16,
}

/// Issues and parses snowflake ids.
///
/// Each generator owns its own coordinator instance; sequence state is
/// never process-global.
#[derive(Debug)]
pub struct Snowgen {
    node_id: u16,
    codec: IdCodec,
    coordinator: SequenceCoordinator,
    clock: Box<dyn Clock>,
    config: SnowgenConfig,
}

impl Snowgen {
    /// In-process generator with an explicit node id and default
    /// configuration
    pub fn new(node_id: u16) -> Result<Self, SnowgenError> {
        Self::with_config(SnowgenConfig::builder().node_id(node_id).build())
    }

    /// Generator with custom configuration.
    ///
    /// Fails with a configuration error when the resolved node id is out
    /// of range, and with [`SnowgenError::CoordinatorUnavailable`] when a
    /// cluster backend is selected with an unusable URL.
    pub fn with_config(config: SnowgenConfig) -> Result<Self, SnowgenError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Generator reading time from `clock` instead of the system clock
    pub fn with_clock(config: SnowgenConfig, clock: Box<dyn Clock>) -> Result<Self, SnowgenError> {
        let node_id = resolve_node_id(config.node_id())?;
        let coordinator = match config.coordination() {
            Coordination::InProcess => SequenceCoordinator::Process(ProcessCoordinator::new(
                config.spin_loops(),
                config.spin_yield_every(),
            )),
            Coordination::FileLock { dir } => {
                SequenceCoordinator::File(FileCoordinator::new(dir.clone()))
            }
            Coordination::Cluster { url, timeout } => {
                SequenceCoordinator::Cluster(ClusterCoordinator::new(url, *timeout)?)
            }
        };
        Ok(Self {
            node_id,
            codec: IdCodec::new(config.epoch()),
            coordinator,
            clock,
            config,
        })
    }

    /// Generate a new id.
    ///
    /// One clock snapshot per call; the coordinator may advance the tick
    /// past a throttled millisecond before the codec packs it.
    pub fn generate(&self) -> Result<u64, SnowgenError> {
        let tick = self.clock.now_millis();
        let (tick, sequence) = self.coordinator.next(tick, self.clock.as_ref())?;
        self.codec.pack(tick, self.node_id, sequence)
    }

    /// Generate a new id in its decimal string form
    pub fn generate_string(&self) -> Result<String, SnowgenError> {
        self.generate().map(|id| id.to_string())
    }

    /// Decode a decimal id string into its components
    pub fn parse(&self, id: &str) -> Result<ParsedId, SnowgenError> {
        let value: u64 = id
            .trim()
            .parse()
            .map_err(|_| SnowgenError::MalformedId { value: id.to_string() })?;
        let (timestamp, node_id, sequence) = self.codec.unpack(value);
        Ok(ParsedId {
            timestamp,
            datetime: format_datetime(timestamp),
            node_id,
            sequence,
        })
    }

    /// Raw (timestamp ms, node id, sequence) fields of an id
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        self.codec.unpack(id)
    }

    /// The node id this generator stamps into every id
    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    pub fn config(&self) -> &SnowgenConfig {
        &self.config
    }

    /// The codec for this generator's epoch
    #[inline(always)]
    pub const fn codec(&self) -> IdCodec {
        self.codec
    }
}

fn format_datetime(millis: u64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
