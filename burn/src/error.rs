//! Burn-specific errors.

use cinder_ledger::LedgerError;
use cinder_store::StoreError;
use cinder_types::{AccountId, Ordinal};
use thiserror::Error;

/// Rejections reported by the burnable token collaborator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("insufficient allowance: need {needed}, available {available}")]
    InsufficientAllowance { needed: u128, available: u128 },

    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },
}

#[derive(Debug, Error)]
pub enum BurnError {
    #[error("burn amount must be non-zero")]
    InvalidAmount,

    #[error("insufficient allowance: need {needed}, available {available}")]
    InsufficientAllowance { needed: u128, available: u128 },

    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("{account} is not the owner of certificate {ordinal}")]
    NotOwner { ordinal: Ordinal, account: AccountId },

    #[error("{requester} is not authorized to transfer certificate {ordinal}")]
    Unauthorized { ordinal: Ordinal, requester: AccountId },

    #[error("invalid target account {0}")]
    InvalidTarget(AccountId),

    #[error("certificate {0} not found")]
    NotFound(Ordinal),

    #[error("ordinal space exhausted")]
    OrdinalsExhausted,

    #[error("minted ordinal {minted} does not match precomputed {expected}")]
    OrdinalMismatch { expected: Ordinal, minted: Ordinal },

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<TokenError> for BurnError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InsufficientAllowance { needed, available } => {
                Self::InsufficientAllowance { needed, available }
            }
            TokenError::InsufficientBalance { needed, available } => {
                Self::InsufficientBalance { needed, available }
            }
        }
    }
}

impl From<LedgerError> for BurnError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(ordinal) => Self::NotFound(ordinal),
            LedgerError::NotOwner { ordinal, account } => Self::NotOwner { ordinal, account },
            LedgerError::Unauthorized { ordinal, requester } => {
                Self::Unauthorized { ordinal, requester }
            }
            LedgerError::InvalidTarget(account) => Self::InvalidTarget(account),
            LedgerError::OrdinalsExhausted => Self::OrdinalsExhausted,
            LedgerError::Store(e) => Self::Store(e),
            LedgerError::Snapshot(msg) => Self::Serialization(msg),
        }
    }
}
