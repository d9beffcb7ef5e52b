//! The burn controller: token debit, rarity, record packing and mint.

use std::collections::HashMap;

use cinder_codec::{BurnRecord, PackedRecord};
use cinder_ledger::TokenLedger;
use cinder_rarity::{RarityOracle, RaritySource};
use cinder_store::{MetaStore, RecordStore, StoreError};
use cinder_types::{AccountId, BlockContext, Ordinal};
use tracing::{debug, info, warn};

use crate::error::BurnError;
use crate::event::{BurnEvent, EventBus, Listener};
use crate::token::{BurnableToken, RewardSource};

const TOTAL_BURNED_KEY: &[u8] = b"total_burned";

/// Owns the certificate ledger and the packed record of every certificate.
///
/// `account` is the spender the caller approves on the burnable token; burned
/// amounts accumulate there. Every mutating method takes `&mut self`, so calls
/// are applied one at a time in the order they are made.
pub struct BurnController<T, R, O = RarityOracle> {
    account: AccountId,
    ledger: TokenLedger,
    records: HashMap<Ordinal, PackedRecord>,
    token: T,
    rewards: R,
    oracle: O,
    total_burned: u128,
    events: Vec<BurnEvent>,
    bus: EventBus,
}

impl<T: BurnableToken, R: RewardSource> BurnController<T, R, RarityOracle> {
    pub fn new(account: AccountId, token: T, rewards: R) -> Self {
        Self::with_oracle(account, token, rewards, RarityOracle)
    }
}

impl<T: BurnableToken, R: RewardSource, O: RaritySource> BurnController<T, R, O> {
    /// A controller scoring rarity with a custom source.
    pub fn with_oracle(account: AccountId, token: T, rewards: R, oracle: O) -> Self {
        Self {
            account,
            ledger: TokenLedger::new(),
            records: HashMap::new(),
            token,
            rewards,
            oracle,
            total_burned: 0,
            events: Vec::new(),
            bus: EventBus::new(),
        }
    }

    /// Burn `amount` of the caller's tokens and mint them a certificate.
    ///
    /// The caller must have approved at least `amount` to this controller's
    /// account. On any error no state has changed, neither here nor on the
    /// token.
    pub fn burn(
        &mut self,
        caller: AccountId,
        amount: u128,
        block: BlockContext,
    ) -> Result<Ordinal, BurnError> {
        if amount == 0 {
            warn!(%caller, "burn rejected: zero amount");
            return Err(BurnError::InvalidAmount);
        }
        // Checked before the debit: once tokens move, mint must not fail.
        if !self.ledger.can_mint() {
            warn!(%caller, amount, "burn rejected: ordinals exhausted");
            return Err(BurnError::OrdinalsExhausted);
        }
        if let Err(err) = self.token.transfer_from(&caller, &self.account, amount) {
            warn!(%caller, amount, error = %err, "burn rejected by token");
            return Err(err.into());
        }

        let expected = self.ledger.next_ordinal();
        let rarity = self.oracle.compute(expected, block.height);
        let record = BurnRecord {
            term: self.rewards.term(),
            maturity_ts: block.timestamp.as_secs(),
            amount,
            apy: self.rewards.apy(),
            rarity_score: rarity.score,
            rarity_flags: rarity.flags.encode(),
        };
        let word = record.pack();

        let minted = self.ledger.mint(caller)?;
        debug_assert_eq!(minted, expected);
        if minted != expected {
            return Err(BurnError::OrdinalMismatch { expected, minted });
        }
        self.records.insert(minted, word);
        self.total_burned = self.total_burned.saturating_add(amount);

        info!(
            ordinal = %minted,
            %caller,
            amount,
            block = block.height,
            rarity_score = rarity.score,
            "certificate minted"
        );
        self.emit(BurnEvent::Burned {
            caller,
            amount,
            ordinal: minted,
            rarity_score: rarity.score,
        });
        Ok(minted)
    }

    pub fn transfer(
        &mut self,
        requester: &AccountId,
        from: &AccountId,
        to: &AccountId,
        ordinal: Ordinal,
    ) -> Result<(), BurnError> {
        self.ledger.transfer(requester, from, to, ordinal)?;
        self.emit(BurnEvent::Transferred {
            from: *from,
            to: *to,
            ordinal,
        });
        Ok(())
    }

    pub fn approve(
        &mut self,
        requester: &AccountId,
        ordinal: Ordinal,
        approved: Option<AccountId>,
    ) -> Result<(), BurnError> {
        self.ledger.approve(requester, ordinal, approved)?;
        self.emit(BurnEvent::Approved {
            owner: *requester,
            approved,
            ordinal,
        });
        Ok(())
    }

    pub fn set_approval_for_all(
        &mut self,
        owner: &AccountId,
        operator: &AccountId,
        approved: bool,
    ) -> Result<(), BurnError> {
        self.ledger.set_approval_for_all(owner, operator, approved)?;
        self.emit(BurnEvent::ApprovalForAll {
            owner: *owner,
            operator: *operator,
            approved,
        });
        Ok(())
    }

    fn emit(&mut self, event: BurnEvent) {
        self.bus.emit(&event);
        self.events.push(event);
    }

    /// Register a listener for every subsequent event.
    pub fn subscribe(&mut self, listener: Listener) {
        self.bus.subscribe(listener);
    }

    /// Register a listener for subsequent events about `ordinal` only.
    pub fn subscribe_ordinal(&mut self, ordinal: Ordinal, listener: Listener) {
        self.bus.subscribe_ordinal(ordinal, listener);
    }
}

// ── Queries ────────────────────────────────────────────────────────────

impl<T, R, O> BurnController<T, R, O> {
    /// The spender account burned tokens are transferred to.
    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn balance_of(&self, account: &AccountId) -> usize {
        self.ledger.balance_of(account)
    }

    pub fn owned_tokens(&self, account: &AccountId) -> Vec<Ordinal> {
        self.ledger.owned_tokens(account)
    }

    pub fn owner_of(&self, ordinal: Ordinal) -> Result<AccountId, BurnError> {
        Ok(self.ledger.owner_of(ordinal)?)
    }

    pub fn get_approved(&self, ordinal: Ordinal) -> Result<Option<AccountId>, BurnError> {
        Ok(self.ledger.get_approved(ordinal)?)
    }

    pub fn is_approved_for_all(&self, owner: &AccountId, operator: &AccountId) -> bool {
        self.ledger.is_approved_for_all(owner, operator)
    }

    /// The packed word stored for `ordinal`.
    pub fn record_of(&self, ordinal: Ordinal) -> Result<PackedRecord, BurnError> {
        self.records
            .get(&ordinal)
            .copied()
            .ok_or(BurnError::NotFound(ordinal))
    }

    pub fn decoded_record(&self, ordinal: Ordinal) -> Result<BurnRecord, BurnError> {
        self.record_of(ordinal).map(|word| word.decode())
    }

    pub fn total_supply(&self) -> u64 {
        self.ledger.total_supply()
    }

    /// Sum of all burned amounts, in raw token units.
    pub fn total_burned(&self) -> u128 {
        self.total_burned
    }

    pub fn events(&self) -> &[BurnEvent] {
        &self.events
    }

    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    pub fn rewards(&self) -> &R {
        &self.rewards
    }
}

// ── Persistence ────────────────────────────────────────────────────────

impl<T, R, O> BurnController<T, R, O> {
    /// Write the ledger, every packed record and the burn total to `store`.
    pub fn save_to_store<S: MetaStore + RecordStore>(&self, store: &S) -> Result<(), BurnError> {
        self.ledger.save_to_store(store)?;
        let mut ordinals: Vec<&Ordinal> = self.records.keys().collect();
        ordinals.sort();
        for ordinal in ordinals {
            if let Some(word) = self.records.get(ordinal) {
                store.put_record(*ordinal, &word.to_bytes())?;
            }
        }
        let total = bincode::serialize(&self.total_burned)
            .map_err(|e| BurnError::Serialization(e.to_string()))?;
        store.put_meta(TOTAL_BURNED_KEY, &total)?;
        debug!(records = self.records.len(), "controller state saved");
        Ok(())
    }

    /// Restore a controller saved with [`BurnController::save_to_store`].
    ///
    /// Events and listeners are not persisted and start empty. Fails with
    /// [`StoreError::Corruption`] if the record store and the ledger disagree
    /// on which ordinals exist.
    pub fn load_from_store<S: MetaStore + RecordStore>(
        store: &S,
        account: AccountId,
        token: T,
        rewards: R,
    ) -> Result<Self, BurnError>
    where
        O: Default,
    {
        let ledger = TokenLedger::load_from_store(store)?;

        let mut records = HashMap::new();
        for (ordinal, bytes) in store.iter_records()? {
            if !ledger.exists(ordinal) {
                return Err(StoreError::Corruption(format!(
                    "record for unminted certificate {ordinal}"
                ))
                .into());
            }
            records.insert(ordinal, PackedRecord::from_bytes(bytes));
        }
        if records.len() as u64 != ledger.total_supply() {
            return Err(StoreError::Corruption(format!(
                "{} records for {} certificates",
                records.len(),
                ledger.total_supply()
            ))
            .into());
        }

        let total_burned = match store.get_meta(TOTAL_BURNED_KEY)? {
            Some(bytes) => bincode::deserialize(&bytes).map_err(|e| {
                StoreError::Corruption(format!("unreadable burn total: {e}"))
            })?,
            None => 0,
        };

        debug!(records = records.len(), "controller state loaded");
        Ok(Self {
            account,
            ledger,
            records,
            token,
            rewards,
            oracle: O::default(),
            total_burned,
            events: Vec::new(),
            bus: EventBus::new(),
        })
    }
}
