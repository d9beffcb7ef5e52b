//! Nullable burnable token: in-memory balances and allowances.

use cinder_burn::{BurnableToken, TokenError};
use cinder_types::AccountId;
use std::collections::HashMap;

/// An in-memory fungible token.
///
/// `transfer_from` checks the allowance first and the balance second, and
/// changes nothing unless both suffice.
#[derive(Clone, Debug, Default)]
pub struct NullToken {
    balances: HashMap<AccountId, u128>,
    allowances: HashMap<(AccountId, AccountId), u128>,
    total_supply: u128,
}

impl NullToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `account` out of thin air.
    pub fn mint(&mut self, account: &AccountId, amount: u128) {
        let balance = self.balances.entry(*account).or_default();
        *balance = balance.saturating_add(amount);
        self.total_supply = self.total_supply.saturating_add(amount);
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }
}

impl BurnableToken for NullToken {
    fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> u128 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: u128) {
        self.allowances.insert((*owner, *spender), amount);
    }

    fn transfer_from(
        &mut self,
        owner: &AccountId,
        spender: &AccountId,
        amount: u128,
    ) -> Result<(), TokenError> {
        let allowance = self.allowance(owner, spender);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance {
                needed: amount,
                available: allowance,
            });
        }
        let balance = self.balance_of(owner);
        if balance < amount {
            return Err(TokenError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }

        self.allowances
            .insert((*owner, *spender), allowance - amount);
        self.balances.insert(*owner, balance - amount);
        let credited = self.balances.entry(*spender).or_default();
        *credited = credited.saturating_add(amount);
        Ok(())
    }
}
