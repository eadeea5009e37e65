//! SnowgenConfig builder for constructing configuration

use std::time::Duration;

use super::{Coordination, SnowgenConfig};

/// Default configuration values
pub(super) const DEFAULT_EPOCH: u64 = 1_704_067_200_000; // January 1, 2024 UTC
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;
pub(super) const DEFAULT_CLUSTER_TIMEOUT: Duration = Duration::from_millis(500);

/// Builder for SnowgenConfig
#[derive(Debug)]
pub struct SnowgenConfigBuilder {
    pub(super) epoch: u64,
    pub(super) node_id: Option<u16>,
    pub(super) coordination: Coordination,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl SnowgenConfigBuilder {
    /// Create a new SnowgenConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            node_id: None,
            coordination: Coordination::InProcess,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch timestamp in milliseconds.
    ///
    /// Must not change once ids have been issued with it.
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set an explicit node id.
    ///
    /// Validated against `0..=1023` when the generator is constructed; when
    /// unset, the node id is taken from the environment or derived from the
    /// host identity.
    pub const fn node_id(mut self, node_id: u16) -> Self {
        self.node_id = Some(node_id);
        self
    }

    /// Select the coordination backend
    pub fn coordination(mut self, coordination: Coordination) -> Self {
        self.coordination = coordination;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep when
    /// a millisecond's sequence budget is spent
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables
    /// yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowgenConfig
    pub fn build(self) -> SnowgenConfig {
        SnowgenConfig::from_builder(self)
    }
}

impl Default for SnowgenConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
