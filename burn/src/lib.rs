//! Burn controller: the single entry point that turns a token burn into a
//! certificate.
//!
//! A burn debits the external token, freezes the rarity of the next ordinal
//! into a packed record and mints that ordinal to the caller, all within one
//! `&mut self` call. Either every step succeeds or nothing changes.

pub mod controller;
pub mod error;
pub mod event;
pub mod token;

pub use controller::BurnController;
pub use error::{BurnError, TokenError};
pub use event::{BurnEvent, EventBus, Listener};
pub use token::{BurnableToken, FixedRewards, NoRewards, RewardSource};
