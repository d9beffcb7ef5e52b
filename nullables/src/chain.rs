//! Nullable chain: deterministic block heights and timestamps.

use cinder_types::{BlockContext, Timestamp};
use std::cell::Cell;

/// A deterministic block source.
///
/// Blocks only advance when you tell it to; each block is `block_time_secs`
/// after the previous one.
pub struct NullChain {
    height: Cell<u64>,
    timestamp: Cell<u64>,
    block_time_secs: u64,
}

impl NullChain {
    pub fn new(genesis_height: u64, genesis_timestamp: u64, block_time_secs: u64) -> Self {
        Self {
            height: Cell::new(genesis_height),
            timestamp: Cell::new(genesis_timestamp),
            block_time_secs,
        }
    }

    /// The block calls currently execute in.
    pub fn current(&self) -> BlockContext {
        BlockContext::new(self.height.get(), Timestamp::new(self.timestamp.get()))
    }

    /// Move forward `blocks` blocks and return the new current block.
    pub fn advance(&self, blocks: u64) -> BlockContext {
        let next = self.current().advanced(blocks, self.block_time_secs);
        self.height.set(next.height);
        self.timestamp.set(next.timestamp.as_secs());
        next
    }

    /// Jump to a specific height, keeping the timestamp in step.
    pub fn set_height(&self, height: u64) {
        let current = self.height.get();
        if height >= current {
            self.advance(height - current);
        } else {
            let back = (current - height).saturating_mul(self.block_time_secs);
            self.height.set(height);
            self.timestamp.set(self.timestamp.get().saturating_sub(back));
        }
    }
}

impl Default for NullChain {
    fn default() -> Self {
        Self::new(1, 0, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_height_and_time() {
        let chain = NullChain::new(10, 1_000, 12);
        let block = chain.advance(2);
        assert_eq!(block.height, 12);
        assert_eq!(block.timestamp, Timestamp::new(1_024));
        assert_eq!(chain.current(), block);
    }

    #[test]
    fn set_height_both_directions() {
        let chain = NullChain::new(10, 1_000, 10);
        chain.set_height(15);
        assert_eq!(chain.current(), BlockContext::new(15, Timestamp::new(1_050)));
        chain.set_height(11);
        assert_eq!(chain.current(), BlockContext::new(11, Timestamp::new(1_010)));
    }
}
