//! Certificate ownership ledger.
//!
//! Tracks which account owns which certificate ordinal. Ordinals are handed
//! out sequentially from 1 by `mint` and never reused. Each account's
//! holdings are kept in a dense list with a position index so insertion,
//! removal and enumeration are all O(1) amortized.

pub mod error;
pub mod ledger;
pub mod ownership;
pub mod snapshot;

pub use error::LedgerError;
pub use ledger::TokenLedger;
pub use ownership::OwnershipIndex;
pub use snapshot::{AccountHoldings, LedgerSnapshot, SNAPSHOT_VERSION};
