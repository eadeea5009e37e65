//! Configuration for Snowgen generators

mod builder;

use std::path::PathBuf;
use std::time::Duration;

pub use builder::SnowgenConfigBuilder;
use builder::{DEFAULT_CLUSTER_TIMEOUT, DEFAULT_EPOCH, DEFAULT_SPIN_LOOPS, DEFAULT_SPIN_YIELD_EVERY};

/// Which callers share one uniqueness guarantee, and the mechanism that
/// serializes them.
///
/// The set is closed on purpose: a backend is picked once at construction,
/// and a generator never falls back to a weaker scope at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Coordination {
    /// One generator instance shared by any number of threads
    #[default]
    InProcess,
    /// Every process on one host, serialized through an exclusive advisory
    /// lock on a state file. `dir` defaults to the OS temp directory.
    FileLock { dir: Option<PathBuf> },
    /// Every process on every host sharing one Redis instance. Network
    /// calls are bounded by `timeout`.
    Cluster { url: String, timeout: Duration },
}

impl Coordination {
    /// Single-host coordination with the state file in the OS temp
    /// directory
    pub fn file_lock() -> Self {
        Self::FileLock { dir: None }
    }

    /// Cluster-wide coordination with the default network timeout
    pub fn cluster(url: impl Into<String>) -> Self {
        Self::Cluster {
            url: url.into(),
            timeout: DEFAULT_CLUSTER_TIMEOUT,
        }
    }
}

/// Configuration for a [`Snowgen`](crate::Snowgen) generator
#[derive(Debug, Clone)]
pub struct SnowgenConfig {
    epoch: u64,
    node_id: Option<u16>,
    coordination: Coordination,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl SnowgenConfig {
    /// Create a new configuration builder
    pub fn builder() -> SnowgenConfigBuilder {
        SnowgenConfigBuilder::new()
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: SnowgenConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            node_id: b.node_id,
            coordination: b.coordination,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Explicit node id, if one was configured
    #[inline(always)]
    pub const fn node_id(&self) -> Option<u16> {
        self.node_id
    }

    pub fn coordination(&self) -> &Coordination {
        &self.coordination
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowgenConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            node_id: None,
            coordination: Coordination::InProcess,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
