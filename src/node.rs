//! Node id resolution
//!
//! A node id identifies the producing process or host inside an id. At most
//! one live generator per node id may be active within a coordination scope
//! that assumes machine-level uniqueness; two generators sharing a node id
//! collide silently.

use std::env;
use std::net::ToSocketAddrs;

use once_cell::sync::Lazy;

use crate::codec::MAX_NODE_ID;
use crate::error::SnowgenError;

/// Environment override consulted when no explicit node id is configured
pub const NODE_ID_ENV: &str = "SNOWGEN_NODE_ID";

/// Resolve the node id for a new generator.
///
/// Resolution order, first success wins:
/// 1. the explicit value, validated against `0..=1023`
/// 2. the [`NODE_ID_ENV`] environment override, parsed and validated the
///    same way
/// 3. a value derived from the host's network identity, reduced to 10 bits
///
/// Explicit and overridden values are never masked; an out-of-range value
/// is a configuration error.
pub fn resolve_node_id(explicit: Option<u16>) -> Result<u16, SnowgenError> {
    if let Some(value) = explicit {
        return validate(i64::from(value));
    }
    if let Ok(raw) = env::var(NODE_ID_ENV) {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| SnowgenError::NodeIdOverrideInvalid { value: raw.clone() })?;
        return validate(value);
    }
    Ok(derived_node_id())
}

fn validate(value: i64) -> Result<u16, SnowgenError> {
    if !(0..=i64::from(MAX_NODE_ID)).contains(&value) {
        return Err(SnowgenError::NodeIdOutOfRange {
            value,
            max: MAX_NODE_ID,
        });
    }
    Ok(value as u16)
}

/// CRC-32 of the primary MAC address, falling back to a resolved host
/// address and finally the bare hostname, reduced to 10 bits.
fn derived_node_id() -> u16 {
    static DERIVED: Lazy<u16> = Lazy::new(|| {
        let id = (host_fingerprint() & u32::from(MAX_NODE_ID)) as u16;
        tracing::debug!(node_id = id, "derived node id from host identity");
        id
    });
    *DERIVED
}

fn host_fingerprint() -> u32 {
    if let Ok(Some(mac)) = mac_address::get_mac_address() {
        return crc32fast::hash(&mac.bytes());
    }
    let Ok(name) = hostname::get() else {
        tracing::warn!("no MAC address or hostname available, deriving node id 0");
        return 0;
    };
    let name = name.to_string_lossy();
    let host: &str = &name;
    if let Ok(mut addrs) = (host, 0u16).to_socket_addrs() {
        if let Some(addr) = addrs.next() {
            return crc32fast::hash(addr.ip().to_string().as_bytes());
        }
    }
    crc32fast::hash(host.as_bytes())
}
