//! Packed record storage trait.

use cinder_types::Ordinal;

use crate::StoreError;

/// Store of packed certificate records, keyed by ordinal.
///
/// Records are the 32 big-endian bytes of the packed word. A record is
/// written once at mint time and never rewritten.
pub trait RecordStore {
    fn put_record(&self, ordinal: Ordinal, record: &[u8; 32]) -> Result<(), StoreError>;

    fn get_record(&self, ordinal: Ordinal) -> Result<Option<[u8; 32]>, StoreError>;

    /// All stored records, ascending by ordinal.
    fn iter_records(&self) -> Result<Vec<(Ordinal, [u8; 32])>, StoreError>;

    fn record_count(&self) -> Result<u64, StoreError>;
}
