//! Events emitted by the burn controller.

use cinder_types::{AccountId, Ordinal};
use serde::{Deserialize, Serialize};

/// Observable state changes, in the order they were applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurnEvent {
    /// Tokens were burned and a certificate minted to `caller`.
    Burned {
        caller: AccountId,
        amount: u128,
        ordinal: Ordinal,
        rarity_score: u16,
    },
    Transferred {
        from: AccountId,
        to: AccountId,
        ordinal: Ordinal,
    },
    Approved {
        owner: AccountId,
        approved: Option<AccountId>,
        ordinal: Ordinal,
    },
    ApprovalForAll {
        owner: AccountId,
        operator: AccountId,
        approved: bool,
    },
}

impl BurnEvent {
    /// The certificate this event concerns, if any.
    pub fn ordinal(&self) -> Option<Ordinal> {
        match self {
            Self::Burned { ordinal, .. }
            | Self::Transferred { ordinal, .. }
            | Self::Approved { ordinal, .. } => Some(*ordinal),
            Self::ApprovalForAll { .. } => None,
        }
    }
}

/// A boxed event callback.
pub type Listener = Box<dyn Fn(&BurnEvent) + Send + Sync>;

struct Subscription {
    /// `None` receives every event; `Some` only events about that certificate.
    ordinal: Option<Ordinal>,
    listener: Listener,
}

/// Synchronous fan-out of burn events.
///
/// Listeners run inline on the emitting call; keep them fast.
pub struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Receive every event.
    pub fn subscribe(&mut self, listener: Listener) {
        self.subscriptions.push(Subscription {
            ordinal: None,
            listener,
        });
    }

    /// Receive only the events about one certificate: its burn, transfers and
    /// approvals. Operator approvals name no certificate and are skipped.
    pub fn subscribe_ordinal(&mut self, ordinal: Ordinal, listener: Listener) {
        self.subscriptions.push(Subscription {
            ordinal: Some(ordinal),
            listener,
        });
    }

    pub fn emit(&self, event: &BurnEvent) {
        let concerns = event.ordinal();
        for sub in &self.subscriptions {
            if sub.ordinal.is_none() || sub.ordinal == concerns {
                (sub.listener)(event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
