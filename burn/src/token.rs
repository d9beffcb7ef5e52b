//! Collaborator interfaces: the burnable token and the reward source.

use cinder_types::AccountId;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// The fungible token that is burned.
///
/// `transfer_from` must either move the full amount or leave balances and
/// allowances untouched.
pub trait BurnableToken {
    fn balance_of(&self, account: &AccountId) -> u128;

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> u128;

    fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: u128);

    /// Move `amount` from `owner` to `spender`, consuming `spender`'s allowance.
    fn transfer_from(
        &mut self,
        owner: &AccountId,
        spender: &AccountId,
        amount: u128,
    ) -> Result<(), TokenError>;
}

/// Source of the `apy` and `term` fields written into new records.
pub trait RewardSource {
    fn apy(&self) -> u16;
    fn term(&self) -> u16;
}

/// Records carry zero apy and term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRewards;

impl RewardSource for NoRewards {
    fn apy(&self) -> u16 {
        0
    }

    fn term(&self) -> u16 {
        0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRewards {
    pub apy: u16,
    pub term: u16,
}

impl FixedRewards {
    pub fn new(apy: u16, term: u16) -> Self {
        Self { apy, term }
    }
}

impl RewardSource for FixedRewards {
    fn apy(&self) -> u16 {
        self.apy
    }

    fn term(&self) -> u16 {
        self.term
    }
}

impl<R: RewardSource + ?Sized> RewardSource for &R {
    fn apy(&self) -> u16 {
        (**self).apy()
    }

    fn term(&self) -> u16 {
        (**self).term()
    }
}
