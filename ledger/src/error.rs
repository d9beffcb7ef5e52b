use cinder_types::{AccountId, Ordinal};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("certificate {0} not found")]
    NotFound(Ordinal),

    #[error("{account} is not the owner of certificate {ordinal}")]
    NotOwner { ordinal: Ordinal, account: AccountId },

    #[error("{requester} is not authorized to transfer certificate {ordinal}")]
    Unauthorized { ordinal: Ordinal, requester: AccountId },

    #[error("invalid target account {0}")]
    InvalidTarget(AccountId),

    #[error("ordinal space exhausted")]
    OrdinalsExhausted,

    #[error("storage error: {0}")]
    Store(#[from] cinder_store::StoreError),

    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}
