//! Abstract storage traits for the Cinder engine.
//!
//! Storage backends implement these traits; the ledger and the burn
//! controller depend only on the traits and serialize their own state, so this
//! crate never depends on them.

pub mod error;
pub mod meta;
pub mod record;

pub use error::StoreError;
pub use meta::MetaStore;
pub use record::RecordStore;
