//! Fundamental types for the Cinder burn-certificate engine.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! account identifiers, certificate ordinals, block context and collection
//! parameters, which also fix the decimals of the burned token.

pub mod account;
pub mod error;
pub mod ordinal;
pub mod params;
pub mod time;

pub use account::AccountId;
pub use error::CinderError;
pub use ordinal::Ordinal;
pub use params::BurnParams;
pub use time::{BlockContext, Timestamp};
