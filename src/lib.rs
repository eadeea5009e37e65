//! # snowgen
//!
//! Snowflake-style 64-bit identifiers with a pluggable coordination scope.
//!
//! Every id packs a millisecond timestamp, a 10-bit node id and a 12-bit
//! per-millisecond sequence, so ids are:
//! - 📈 Time-sorted across milliseconds
//! - 🔒 Unique within their coordination scope
//! - 🔄 Losslessly decodable back into their components
//!
//! The sequence counter can be coordinated three ways, chosen at
//! construction:
//! - [`Coordination::InProcess`]: one generator instance, any number of
//!   threads
//! - [`Coordination::FileLock`]: every process on one host, serialized
//!   through an advisory file lock
//! - [`Coordination::Cluster`]: every process on every host, serialized
//!   through an atomic Redis counter
//!
//! ```
//! use snowgen::Snowgen;
//!
//! let generator = Snowgen::new(42).unwrap();
//! let id = generator.generate_string().unwrap();
//! let parsed = generator.parse(&id).unwrap();
//! assert_eq!(parsed.node_id, 42);
//! ```

#![forbid(unsafe_code)]

mod clock;
mod codec;
mod config;
mod coordinator;
mod error;
mod generator;
mod node;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use codec::{IdCodec, MAX_NODE_ID, MAX_SEQUENCE};
pub use config::{Coordination, SnowgenConfig, SnowgenConfigBuilder};
pub use error::SnowgenError;
pub use generator::{ParsedId, Snowgen};
pub use node::{resolve_node_id, NODE_ID_ENV};
