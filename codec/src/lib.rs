//! Burn record codec: packs a certificate's attributes into one 256-bit word.
//!
//! Layout, most significant field first:
//!
//! ```text
//! term (16) | maturity_ts (64) | amount (128) | apy (16) | rarity_score (16) | rarity_flags (16)
//! ```
//!
//! Encoding truncates: each input keeps only its low `width` bits, so
//! `decode(encode(x)).field == x mod 2^width`. Values are never clamped and
//! never bleed into a neighbouring field. The layout is a format contract;
//! changing a width or the field order breaks every stored record.

pub mod error;
pub mod flags;
pub mod layout;
pub mod record;
pub mod word;

pub use error::CodecError;
pub use flags::RarityFlags;
pub use layout::Field;
pub use record::{BurnRecord, PackedRecord, RecordFields};
pub use word::U256;
