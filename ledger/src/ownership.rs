//! Per-account ownership index with O(1) insert, remove and membership.

use std::collections::HashMap;

use cinder_types::{AccountId, Ordinal};

/// Which ordinals each account holds.
///
/// Each account has a dense list of ordinals; `positions` maps every held
/// ordinal to its slot in its owner's list. Removal swaps the last entry into
/// the vacated slot, so enumeration order is insertion order until the first
/// removal and stays stable between mutations.
#[derive(Clone, Debug, Default)]
pub struct OwnershipIndex {
    tokens: HashMap<AccountId, Vec<Ordinal>>,
    positions: HashMap<Ordinal, usize>,
}

impl OwnershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `ordinal` to `account`. Returns `false` if the ordinal is already
    /// held by any account.
    pub fn insert(&mut self, account: AccountId, ordinal: Ordinal) -> bool {
        if self.positions.contains_key(&ordinal) {
            return false;
        }
        let list = self.tokens.entry(account).or_default();
        self.positions.insert(ordinal, list.len());
        list.push(ordinal);
        true
    }

    /// Remove `ordinal` from `account`. Returns `false` if `account` does not
    /// hold it.
    pub fn remove(&mut self, account: &AccountId, ordinal: Ordinal) -> bool {
        let Some(&pos) = self.positions.get(&ordinal) else {
            return false;
        };
        let Some(list) = self.tokens.get_mut(account) else {
            return false;
        };
        if list.get(pos) != Some(&ordinal) {
            return false;
        }
        list.swap_remove(pos);
        if let Some(&moved) = list.get(pos) {
            self.positions.insert(moved, pos);
        }
        if list.is_empty() {
            self.tokens.remove(account);
        }
        self.positions.remove(&ordinal);
        true
    }

    pub fn contains(&self, account: &AccountId, ordinal: Ordinal) -> bool {
        match (self.positions.get(&ordinal), self.tokens.get(account)) {
            (Some(&pos), Some(list)) => list.get(pos) == Some(&ordinal),
            _ => false,
        }
    }

    /// Ordinals held by `account`, in index order.
    pub fn tokens_of(&self, account: &AccountId) -> &[Ordinal] {
        self.tokens.get(account).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, account: &AccountId) -> usize {
        self.tokens.get(account).map_or(0, Vec::len)
    }

    /// Total ordinals held across all accounts.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Accounts holding at least one ordinal, in no particular order.
    pub fn accounts(&self) -> impl Iterator<Item = &AccountId> {
        self.tokens.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(n: u64) -> AccountId {
        AccountId::from_low_u64(n)
    }

    fn ord(n: u64) -> Ordinal {
        Ordinal::new(n)
    }

    #[test]
    fn insert_preserves_order() {
        let mut index = OwnershipIndex::new();
        for n in 1..=3 {
            assert!(index.insert(account(1), ord(n)));
        }
        assert_eq!(index.tokens_of(&account(1)), &[ord(1), ord(2), ord(3)]);
        assert_eq!(index.count(&account(1)), 3);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut index = OwnershipIndex::new();
        assert!(index.insert(account(1), ord(1)));
        assert!(!index.insert(account(2), ord(1)));
        assert_eq!(index.count(&account(2)), 0);
    }

    #[test]
    fn remove_swaps_last_into_place() {
        let mut index = OwnershipIndex::new();
        for n in 1..=4 {
            index.insert(account(1), ord(n));
        }
        assert!(index.remove(&account(1), ord(2)));
        assert_eq!(index.tokens_of(&account(1)), &[ord(1), ord(4), ord(3)]);
        assert!(index.contains(&account(1), ord(4)));
        assert!(!index.contains(&account(1), ord(2)));

        // The moved entry can itself be removed afterwards.
        assert!(index.remove(&account(1), ord(4)));
        assert_eq!(index.tokens_of(&account(1)), &[ord(1), ord(3)]);
    }

    #[test]
    fn remove_from_wrong_account_fails() {
        let mut index = OwnershipIndex::new();
        index.insert(account(1), ord(1));
        assert!(!index.remove(&account(2), ord(1)));
        assert!(index.contains(&account(1), ord(1)));
    }

    #[test]
    fn remove_missing_fails() {
        let mut index = OwnershipIndex::new();
        assert!(!index.remove(&account(1), ord(9)));
    }

    #[test]
    fn last_removal_drops_the_account() {
        let mut index = OwnershipIndex::new();
        index.insert(account(1), ord(1));
        index.remove(&account(1), ord(1));
        assert!(index.is_empty());
        assert_eq!(index.accounts().count(), 0);
        assert!(index.tokens_of(&account(1)).is_empty());
    }
}
