//! Ledger snapshots: the complete ownership state at a point in time.
//!
//! The hash is computed deterministically from the ordered holdings so a
//! restored ledger can be checked before it is trusted.

use serde::{Deserialize, Serialize};

use cinder_types::{AccountId, Ordinal};

use crate::error::LedgerError;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Blake2b-256 over every other field except `version`.
    pub hash: [u8; 32],
    pub next_ordinal: Ordinal,
    /// Sorted by account; each token list is in enumeration order.
    pub accounts: Vec<AccountHoldings>,
    pub approvals: Vec<(Ordinal, AccountId)>,
    pub operators: Vec<(AccountId, AccountId)>,
    pub version: u32,
}

/// One account's certificates in `owned_tokens` order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHoldings {
    pub account: AccountId,
    pub tokens: Vec<Ordinal>,
}

impl LedgerSnapshot {
    pub fn create(
        next_ordinal: Ordinal,
        accounts: Vec<AccountHoldings>,
        approvals: Vec<(Ordinal, AccountId)>,
        operators: Vec<(AccountId, AccountId)>,
    ) -> Self {
        let mut snap = Self {
            hash: [0u8; 32],
            next_ordinal,
            accounts,
            approvals,
            operators,
            version: SNAPSHOT_VERSION,
        };
        snap.hash = snap.compute_hash();
        snap
    }

    fn compute_hash(&self) -> [u8; 32] {
        use blake2::digest::consts::U32;
        use blake2::{Blake2b, Digest};

        let mut hasher = Blake2b::<U32>::new();
        hasher.update(self.next_ordinal.get().to_le_bytes());
        for holding in &self.accounts {
            hasher.update(holding.account.as_bytes());
            hasher.update((holding.tokens.len() as u64).to_le_bytes());
            for ordinal in &holding.tokens {
                hasher.update(ordinal.get().to_le_bytes());
            }
        }
        hasher.update((self.approvals.len() as u64).to_le_bytes());
        for (ordinal, approved) in &self.approvals {
            hasher.update(ordinal.get().to_le_bytes());
            hasher.update(approved.as_bytes());
        }
        hasher.update((self.operators.len() as u64).to_le_bytes());
        for (owner, operator) in &self.operators {
            hasher.update(owner.as_bytes());
            hasher.update(operator.as_bytes());
        }

        let result = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&result);
        out
    }

    pub fn verify(&self) -> bool {
        self.hash == self.compute_hash()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        let snap: Self =
            bincode::deserialize(bytes).map_err(|e| LedgerError::Snapshot(e.to_string()))?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(LedgerError::Snapshot(format!(
                "unsupported snapshot version {}",
                snap.version
            )));
        }
        Ok(snap)
    }

    /// Number of certificates held across all accounts.
    pub fn token_count(&self) -> usize {
        self.accounts.iter().map(|h| h.tokens.len()).sum()
    }
}
