//! Cluster backend: an atomic Redis counter keyed by tick
//!
//! Each millisecond gets its own counter key; `INCR` is the only
//! serialization primitive, so there is no read-modify-write race to guard
//! locally. Keys expire shortly after their millisecond can no longer
//! recur.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use redis::{Client, Commands, Connection};

use crate::codec::MAX_SEQUENCE;
use crate::error::SnowgenError;

use super::unavailable;

const KEY_PREFIX: &str = "snowflake:sequence:";
const KEY_TTL_SECS: i64 = 2;

pub(crate) struct ClusterCoordinator {
    client: Client,
    timeout: Duration,
    conn: Mutex<Option<Connection>>,
}

impl ClusterCoordinator {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SnowgenError> {
        let client = Client::open(url).map_err(unavailable)?;
        Ok(Self {
            client,
            timeout,
            conn: Mutex::new(None),
        })
    }

    /// An unreachable or timed-out counter surfaces as
    /// [`SnowgenError::CoordinatorUnavailable`]; the caller decides whether
    /// to retry. There is no fallback to a weaker backend.
    pub fn next(&self, tick: u64) -> Result<(u64, u16), SnowgenError> {
        let mut guard = self.conn.lock().map_err(|_| SnowgenError::LockPoisoned)?;
        let mut conn = match guard.take() {
            Some(conn) => conn,
            None => self.connect()?,
        };
        match increment(&mut conn, tick) {
            Ok(pair) => {
                *guard = Some(conn);
                Ok(pair)
            }
            // the connection is dropped on error, the next call reconnects
            Err(err) => Err(err),
        }
    }

    fn connect(&self) -> Result<Connection, SnowgenError> {
        let conn = self
            .client
            .get_connection_with_timeout(self.timeout)
            .map_err(unavailable)?;
        conn.set_read_timeout(Some(self.timeout)).map_err(unavailable)?;
        conn.set_write_timeout(Some(self.timeout)).map_err(unavailable)?;
        Ok(conn)
    }
}

fn increment(conn: &mut Connection, tick: u64) -> Result<(u64, u16), SnowgenError> {
    let key = sequence_key(tick);
    let count: u64 = conn.incr(&key, 1).map_err(unavailable)?;
    if count == 1 {
        // the first issuer for a tick arms the expiry; a key that outlives
        // its millisecond self-cleans
        if let Err(err) = conn.expire::<_, ()>(&key, KEY_TTL_SECS) {
            tracing::warn!(%key, %err, "failed to arm expiry on sequence key");
        }
    }
    let sequence = ((count - 1) & u64::from(MAX_SEQUENCE)) as u16;
    Ok((tick, sequence))
}

/// Counter key for a millisecond tick
pub(crate) fn sequence_key(tick: u64) -> String {
    format!("{KEY_PREFIX}{tick}")
}

impl fmt::Debug for ClusterCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterCoordinator")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
