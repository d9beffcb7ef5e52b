//! Metadata storage trait.

use crate::StoreError;

/// Generic key-value store for engine bookkeeping.
///
/// Values are opaque bytes; the ledger stores its bincode snapshot here and
/// the controller stores its counters.
pub trait MetaStore {
    /// Retrieve a metadata value, `None` if absent.
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store a metadata value, replacing any previous one.
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Delete a metadata entry. Deleting a missing key is not an error.
    fn delete_meta(&self, key: &[u8]) -> Result<(), StoreError>;
}
