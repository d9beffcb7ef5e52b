//! Timestamps and the block context a burn executes in.
//!
//! Timestamps are Unix epoch seconds (UTC), as reported by the host chain for
//! the block that includes the burn.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds from this timestamp to `now`, zero if `now` is earlier.
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    pub fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Height and timestamp of the block a call executes in.
///
/// Supplied by the host environment for every state-mutating call; the
/// height feeds the rarity oracle and the timestamp is frozen into the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    pub height: u64,
    pub timestamp: Timestamp,
}

impl BlockContext {
    pub fn new(height: u64, timestamp: Timestamp) -> Self {
        Self { height, timestamp }
    }

    /// The context `blocks` blocks later, `block_time_secs` apart.
    pub fn advanced(&self, blocks: u64, block_time_secs: u64) -> Self {
        Self {
            height: self.height.saturating_add(blocks),
            timestamp: self
                .timestamp
                .saturating_add_secs(blocks.saturating_mul(block_time_secs)),
        }
    }
}
