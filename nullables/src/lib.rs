//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator of the burn controller (the burnable token, the block
//! source, the reward source, storage) has an in-memory stand-in here that:
//! - returns deterministic values
//! - can be controlled programmatically
//! - never touches the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests and simulations.

pub mod chain;
pub mod rewards;
pub mod store;
pub mod token;

pub use chain::NullChain;
pub use rewards::NullRewards;
pub use store::NullStore;
pub use token::NullToken;
