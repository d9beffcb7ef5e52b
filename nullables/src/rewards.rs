//! Nullable reward source: adjustable apy and term.

use cinder_burn::RewardSource;
use std::cell::Cell;

/// A reward source whose values can be changed between burns.
#[derive(Default)]
pub struct NullRewards {
    apy: Cell<u16>,
    term: Cell<u16>,
}

impl NullRewards {
    pub fn new(apy: u16, term: u16) -> Self {
        Self {
            apy: Cell::new(apy),
            term: Cell::new(term),
        }
    }

    pub fn set_apy(&self, apy: u16) {
        self.apy.set(apy);
    }

    pub fn set_term(&self, term: u16) {
        self.term.set(term);
    }
}

impl RewardSource for NullRewards {
    fn apy(&self) -> u16 {
        self.apy.get()
    }

    fn term(&self) -> u16 {
        self.term.get()
    }
}
