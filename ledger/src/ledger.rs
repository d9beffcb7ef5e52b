//! The certificate ledger: the only writer of ownership state.

use std::collections::{HashMap, HashSet};

use cinder_store::MetaStore;
use cinder_types::{AccountId, Ordinal};
use tracing::debug;

use crate::error::LedgerError;
use crate::ownership::OwnershipIndex;
use crate::snapshot::{AccountHoldings, LedgerSnapshot};

const SNAPSHOT_KEY: &[u8] = b"ledger_snapshot";

/// Ownership registry for burn certificates.
///
/// `next_ordinal` starts at 1 and is advanced only by [`TokenLedger::mint`].
/// Every minted ordinal is held by exactly one account at all times.
#[derive(Clone, Debug)]
pub struct TokenLedger {
    next_ordinal: Ordinal,
    owners: HashMap<Ordinal, AccountId>,
    holdings: OwnershipIndex,
    approvals: HashMap<Ordinal, AccountId>,
    operators: HashMap<AccountId, HashSet<AccountId>>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self {
            next_ordinal: Ordinal::FIRST,
            owners: HashMap::new(),
            holdings: OwnershipIndex::new(),
            approvals: HashMap::new(),
            operators: HashMap::new(),
        }
    }

    /// The ordinal the next `mint` will assign.
    pub fn next_ordinal(&self) -> Ordinal {
        self.next_ordinal
    }

    /// Whether another mint is possible without exhausting the ordinal space.
    pub fn can_mint(&self) -> bool {
        self.next_ordinal.checked_next().is_some()
    }

    /// Mint the next ordinal to `to`.
    ///
    /// Only fails once `u64::MAX - 1` certificates exist.
    pub fn mint(&mut self, to: AccountId) -> Result<Ordinal, LedgerError> {
        let ordinal = self.next_ordinal;
        self.next_ordinal = ordinal
            .checked_next()
            .ok_or(LedgerError::OrdinalsExhausted)?;
        self.owners.insert(ordinal, to);
        self.holdings.insert(to, ordinal);
        debug!(%ordinal, owner = %to, "certificate minted");
        Ok(ordinal)
    }

    /// Move `ordinal` from `from` to `to` on behalf of `requester`.
    ///
    /// The requester must be the owner, the account approved for this
    /// ordinal, or an operator of the owner. Clears the ordinal's approval.
    pub fn transfer(
        &mut self,
        requester: &AccountId,
        from: &AccountId,
        to: &AccountId,
        ordinal: Ordinal,
    ) -> Result<(), LedgerError> {
        let owner = self.owner_of(ordinal)?;
        if !self.is_authorized(requester, &owner, ordinal) {
            return Err(LedgerError::Unauthorized {
                ordinal,
                requester: *requester,
            });
        }
        if owner != *from {
            return Err(LedgerError::NotOwner {
                ordinal,
                account: *from,
            });
        }
        if to.is_zero() {
            return Err(LedgerError::InvalidTarget(*to));
        }

        self.approvals.remove(&ordinal);
        if from != to {
            self.holdings.remove(from, ordinal);
            self.holdings.insert(*to, ordinal);
            self.owners.insert(ordinal, *to);
        }
        debug!(%ordinal, %from, %to, "certificate transferred");
        Ok(())
    }

    /// Set or clear the single-certificate approval for `ordinal`.
    pub fn approve(
        &mut self,
        owner: &AccountId,
        ordinal: Ordinal,
        approved: Option<AccountId>,
    ) -> Result<(), LedgerError> {
        let current = self.owner_of(ordinal)?;
        if current != *owner {
            return Err(LedgerError::NotOwner {
                ordinal,
                account: *owner,
            });
        }
        match approved {
            Some(account) if !account.is_zero() => {
                self.approvals.insert(ordinal, account);
            }
            _ => {
                self.approvals.remove(&ordinal);
            }
        }
        debug!(%ordinal, %owner, ?approved, "approval updated");
        Ok(())
    }

    /// Grant or revoke `operator` the right to move all of `owner`'s certificates.
    pub fn set_approval_for_all(
        &mut self,
        owner: &AccountId,
        operator: &AccountId,
        approved: bool,
    ) -> Result<(), LedgerError> {
        if owner == operator || operator.is_zero() {
            return Err(LedgerError::InvalidTarget(*operator));
        }
        if approved {
            self.operators.entry(*owner).or_default().insert(*operator);
        } else if let Some(set) = self.operators.get_mut(owner) {
            set.remove(operator);
            if set.is_empty() {
                self.operators.remove(owner);
            }
        }
        debug!(%owner, %operator, approved, "operator approval updated");
        Ok(())
    }

    pub fn owner_of(&self, ordinal: Ordinal) -> Result<AccountId, LedgerError> {
        self.owners
            .get(&ordinal)
            .copied()
            .ok_or(LedgerError::NotFound(ordinal))
    }

    pub fn get_approved(&self, ordinal: Ordinal) -> Result<Option<AccountId>, LedgerError> {
        self.owner_of(ordinal)?;
        Ok(self.approvals.get(&ordinal).copied())
    }

    pub fn is_approved_for_all(&self, owner: &AccountId, operator: &AccountId) -> bool {
        self.operators
            .get(owner)
            .is_some_and(|set| set.contains(operator))
    }

    pub fn exists(&self, ordinal: Ordinal) -> bool {
        self.owners.contains_key(&ordinal)
    }

    /// Ordinals currently held by `account`.
    pub fn owned_tokens(&self, account: &AccountId) -> Vec<Ordinal> {
        self.holdings.tokens_of(account).to_vec()
    }

    pub fn balance_of(&self, account: &AccountId) -> usize {
        self.holdings.count(account)
    }

    /// Number of certificates ever minted.
    pub fn total_supply(&self) -> u64 {
        self.next_ordinal.get().saturating_sub(1)
    }

    /// Check that owners, holdings and the counter agree.
    pub fn is_consistent(&self) -> bool {
        let supply = self.total_supply();
        if self.owners.len() as u64 != supply || self.holdings.len() as u64 != supply {
            return false;
        }
        let owners_match = self.owners.iter().all(|(&ordinal, owner)| {
            ordinal.get() >= 1
                && ordinal < self.next_ordinal
                && self.holdings.contains(owner, ordinal)
        });
        let approvals_valid = self.approvals.keys().all(|o| self.owners.contains_key(o));
        owners_match && approvals_valid
    }

    fn is_authorized(&self, requester: &AccountId, owner: &AccountId, ordinal: Ordinal) -> bool {
        requester == owner
            || self.approvals.get(&ordinal) == Some(requester)
            || self.is_approved_for_all(owner, requester)
    }
}

// ── Snapshots and persistence ──────────────────────────────────────────

impl TokenLedger {
    /// Capture the full ledger state, including per-account enumeration order.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let mut accounts: Vec<AccountHoldings> = self
            .holdings
            .accounts()
            .map(|account| AccountHoldings {
                account: *account,
                tokens: self.holdings.tokens_of(account).to_vec(),
            })
            .collect();
        accounts.sort_by(|a, b| a.account.cmp(&b.account));

        let mut approvals: Vec<(Ordinal, AccountId)> =
            self.approvals.iter().map(|(o, a)| (*o, *a)).collect();
        approvals.sort();

        let mut operators: Vec<(AccountId, AccountId)> = self
            .operators
            .iter()
            .flat_map(|(owner, set)| set.iter().map(move |op| (*owner, *op)))
            .collect();
        operators.sort();

        LedgerSnapshot::create(self.next_ordinal, accounts, approvals, operators)
    }

    /// Rebuild a ledger from a snapshot, rejecting tampered or inconsistent ones.
    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Result<Self, LedgerError> {
        if !snapshot.verify() {
            return Err(LedgerError::Snapshot("hash mismatch".into()));
        }
        if snapshot.next_ordinal < Ordinal::FIRST {
            return Err(LedgerError::Snapshot("next ordinal must be at least 1".into()));
        }
        let mut ledger = Self::new();
        ledger.next_ordinal = snapshot.next_ordinal;
        for holding in &snapshot.accounts {
            for &ordinal in &holding.tokens {
                if !ledger.holdings.insert(holding.account, ordinal) {
                    return Err(LedgerError::Snapshot(format!(
                        "certificate {ordinal} held twice"
                    )));
                }
                ledger.owners.insert(ordinal, holding.account);
            }
        }
        // Only states that `approve` and `set_approval_for_all` can produce.
        for &(ordinal, approved) in &snapshot.approvals {
            if approved.is_zero() {
                return Err(LedgerError::Snapshot(format!(
                    "certificate {ordinal} approved to the zero account"
                )));
            }
            ledger.approvals.insert(ordinal, approved);
        }
        for &(owner, operator) in &snapshot.operators {
            if operator.is_zero() || operator == owner {
                return Err(LedgerError::Snapshot(format!(
                    "invalid operator {operator} for {owner}"
                )));
            }
            ledger.operators.entry(owner).or_default().insert(operator);
        }
        if !ledger.is_consistent() {
            return Err(LedgerError::Snapshot(
                "holdings do not cover every minted ordinal".into(),
            ));
        }
        Ok(ledger)
    }

    /// Persist the ledger as a bincode snapshot under a fixed meta key.
    pub fn save_to_store(&self, store: &dyn MetaStore) -> Result<(), LedgerError> {
        let bytes = self.snapshot().to_bytes()?;
        store.put_meta(SNAPSHOT_KEY, &bytes)?;
        debug!(supply = self.total_supply(), "ledger saved");
        Ok(())
    }

    /// Restore a ledger from a store; an empty store yields a fresh ledger.
    pub fn load_from_store(store: &dyn MetaStore) -> Result<Self, LedgerError> {
        match store.get_meta(SNAPSHOT_KEY)? {
            Some(bytes) => {
                let snapshot = LedgerSnapshot::from_bytes(&bytes)?;
                Self::from_snapshot(&snapshot)
            }
            None => Ok(Self::new()),
        }
    }
}

impl Default for TokenLedger {
    fn default() -> Self {
        Self::new()
    }
}
