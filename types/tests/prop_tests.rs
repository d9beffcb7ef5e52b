use proptest::prelude::*;

use cinder_types::{AccountId, BlockContext, BurnParams, Ordinal, Timestamp};

proptest! {
    /// AccountId display -> parse produces the identical account.
    #[test]
    fn account_display_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let account = AccountId::new(bytes);
        let parsed: AccountId = account.to_string().parse().unwrap();
        prop_assert_eq!(parsed, account);
    }

    /// AccountId::is_zero is true only for all-zero bytes.
    #[test]
    fn account_is_zero_correct(bytes in prop::array::uniform20(0u8..)) {
        prop_assert_eq!(AccountId::new(bytes).is_zero(), bytes == [0u8; 20]);
    }

    /// AccountId bincode serialization roundtrip.
    #[test]
    fn account_bincode_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let account = AccountId::new(bytes);
        let encoded = bincode::serialize(&account).unwrap();
        let decoded: AccountId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, account);
    }

    /// Ordinal ordering follows the inner integer.
    #[test]
    fn ordinal_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        prop_assert_eq!(Ordinal::new(a) <= Ordinal::new(b), a <= b);
    }

    /// checked_next is exactly +1 below the maximum.
    #[test]
    fn ordinal_checked_next(n in 0u64..u64::MAX) {
        prop_assert_eq!(Ordinal::new(n).checked_next(), Some(Ordinal::new(n + 1)));
    }

    /// Timestamp elapsed_since: elapsed_since(now) = now - self (saturating).
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        let now = Timestamp::new(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
    }

    /// Advancing a block context never decreases height or time.
    #[test]
    fn block_context_advance_monotonic(
        height in 0u64..u64::MAX,
        secs in 0u64..u64::MAX,
        blocks in 0u64..1_000_000,
        block_time in 0u64..3_600,
    ) {
        let block = BlockContext::new(height, Timestamp::new(secs));
        let later = block.advanced(blocks, block_time);
        prop_assert!(later.height >= block.height);
        prop_assert!(later.timestamp >= block.timestamp);
    }

    /// Whole tokens survive a trip through raw units for any decimals that fit.
    #[test]
    fn whole_raw_whole_roundtrip(decimals in 0u8..=30, whole in 0u128..1_000_000_000) {
        let params = BurnParams { decimals, ..BurnParams::default() };
        prop_assert_eq!(params.whole_of(params.raw_of(whole)), whole);
    }

    /// Converting to whole tokens never rounds up.
    #[test]
    fn whole_of_truncates(decimals in 0u8..=38, raw in any::<u128>()) {
        let params = BurnParams { decimals, ..BurnParams::default() };
        prop_assert!(params.raw_of(params.whole_of(raw)) <= raw);
    }
}
