//! Rarity flag sub-encoding of the 16-bit `rarity_flags` field.
//!
//! Bit assignment (bit 15 is the field's most significant bit):
//!
//! | bit  | flag                 |
//! |------|----------------------|
//! | 15   | `token_is_prime`     |
//! | 14   | `token_is_fibonacci` |
//! | 13   | `block_is_prime`     |
//! | 12   | `block_is_fibonacci` |
//! | 0-11 | reserved, zero       |
//!
//! Reserved bits are ignored on decode.

use serde::{Deserialize, Serialize};

const TOKEN_IS_PRIME: u16 = 1 << 15;
const TOKEN_IS_FIBONACCI: u16 = 1 << 14;
const BLOCK_IS_PRIME: u16 = 1 << 13;
const BLOCK_IS_FIBONACCI: u16 = 1 << 12;

/// Number-theoretic properties of a certificate's ordinal and mint block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RarityFlags {
    pub token_is_prime: bool,
    pub token_is_fibonacci: bool,
    pub block_is_prime: bool,
    pub block_is_fibonacci: bool,
}

impl RarityFlags {
    pub fn new(
        token_is_prime: bool,
        token_is_fibonacci: bool,
        block_is_prime: bool,
        block_is_fibonacci: bool,
    ) -> Self {
        Self {
            token_is_prime,
            token_is_fibonacci,
            block_is_prime,
            block_is_fibonacci,
        }
    }

    pub fn encode(self) -> u16 {
        let mut bits = 0u16;
        if self.token_is_prime {
            bits |= TOKEN_IS_PRIME;
        }
        if self.token_is_fibonacci {
            bits |= TOKEN_IS_FIBONACCI;
        }
        if self.block_is_prime {
            bits |= BLOCK_IS_PRIME;
        }
        if self.block_is_fibonacci {
            bits |= BLOCK_IS_FIBONACCI;
        }
        bits
    }

    pub fn decode(bits: u16) -> Self {
        Self {
            token_is_prime: bits & TOKEN_IS_PRIME != 0,
            token_is_fibonacci: bits & TOKEN_IS_FIBONACCI != 0,
            block_is_prime: bits & BLOCK_IS_PRIME != 0,
            block_is_fibonacci: bits & BLOCK_IS_FIBONACCI != 0,
        }
    }

    /// How many of the four flags are set.
    pub fn count(&self) -> u32 {
        [
            self.token_is_prime,
            self.token_is_fibonacci,
            self.block_is_prime,
            self.block_is_fibonacci,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u32
    }

    /// All 16 flag combinations, in binary counting order.
    pub fn all_combinations() -> impl Iterator<Item = RarityFlags> {
        (0u8..16).map(|n| {
            RarityFlags::new(n & 8 != 0, n & 4 != 0, n & 2 != 0, n & 1 != 0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sixteen_combinations_roundtrip() {
        let mut seen = std::collections::HashSet::new();
        for flags in RarityFlags::all_combinations() {
            let bits = flags.encode();
            assert_eq!(RarityFlags::decode(bits), flags);
            assert!(seen.insert(bits), "encoding {bits:#06x} is not unique");
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn reserved_bits_stay_clear() {
        for flags in RarityFlags::all_combinations() {
            assert_eq!(flags.encode() & 0x0fff, 0);
        }
    }

    #[test]
    fn decode_ignores_reserved_bits() {
        let flags = RarityFlags::decode(0x0fff);
        assert_eq!(flags, RarityFlags::default());
        let all = RarityFlags::decode(u16::MAX);
        assert_eq!(all.count(), 4);
    }

    #[test]
    fn each_flag_owns_a_distinct_bit() {
        let singles = [
            RarityFlags::new(true, false, false, false),
            RarityFlags::new(false, true, false, false),
            RarityFlags::new(false, false, true, false),
            RarityFlags::new(false, false, false, true),
        ];
        let bits: Vec<u16> = singles.iter().map(|f| f.encode()).collect();
        assert_eq!(bits, vec![0x8000, 0x4000, 0x2000, 0x1000]);
    }
}
