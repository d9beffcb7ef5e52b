//! Field layout of the packed record.
//!
//! Widths and offsets are a permanent format contract: changing any of them
//! changes the meaning of every stored word.

use crate::word::U256;

/// Width of each field in bits, most significant field first.
pub const TERM_BITS: u32 = 16;
pub const MATURITY_TS_BITS: u32 = 64;
pub const AMOUNT_BITS: u32 = 128;
pub const APY_BITS: u32 = 16;
pub const RARITY_SCORE_BITS: u32 = 16;
pub const RARITY_FLAGS_BITS: u32 = 16;

/// Bit offset of each field's least significant bit. Fields are laid out
/// from the low end of the word upwards, flags first.
pub const RARITY_FLAGS_OFFSET: u32 = 0;
pub const RARITY_SCORE_OFFSET: u32 = RARITY_FLAGS_OFFSET + RARITY_FLAGS_BITS;
pub const APY_OFFSET: u32 = RARITY_SCORE_OFFSET + RARITY_SCORE_BITS;
pub const AMOUNT_OFFSET: u32 = APY_OFFSET + APY_BITS;
pub const MATURITY_TS_OFFSET: u32 = AMOUNT_OFFSET + AMOUNT_BITS;
pub const TERM_OFFSET: u32 = MATURITY_TS_OFFSET + MATURITY_TS_BITS;

const _: () = assert!(TERM_OFFSET + TERM_BITS == U256::BITS);

/// One field of the packed record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Reward term, bits 240..256.
    Term,
    /// Block timestamp at mint, bits 176..240.
    MaturityTs,
    /// Raw burned amount, bits 48..176.
    Amount,
    /// Reward rate, bits 32..48.
    Apy,
    /// Rarity score, bits 16..32.
    RarityScore,
    /// Rarity flags, bits 0..16.
    RarityFlags,
}

impl Field {
    /// Every field, most significant first.
    pub const ALL: [Field; 6] = [
        Field::Term,
        Field::MaturityTs,
        Field::Amount,
        Field::Apy,
        Field::RarityScore,
        Field::RarityFlags,
    ];

    /// Number of bits the field occupies.
    pub const fn width(self) -> u32 {
        match self {
            Field::Term => TERM_BITS,
            Field::MaturityTs => MATURITY_TS_BITS,
            Field::Amount => AMOUNT_BITS,
            Field::Apy => APY_BITS,
            Field::RarityScore => RARITY_SCORE_BITS,
            Field::RarityFlags => RARITY_FLAGS_BITS,
        }
    }

    /// Bit position of the field's least significant bit.
    pub const fn offset(self) -> u32 {
        match self {
            Field::Term => TERM_OFFSET,
            Field::MaturityTs => MATURITY_TS_OFFSET,
            Field::Amount => AMOUNT_OFFSET,
            Field::Apy => APY_OFFSET,
            Field::RarityScore => RARITY_SCORE_OFFSET,
            Field::RarityFlags => RARITY_FLAGS_OFFSET,
        }
    }

    /// Largest value the field can hold.
    pub fn max_value(self) -> U256 {
        U256::ones(self.width())
    }

    /// Shift `value mod 2^width` into this field's position.
    pub fn place(self, value: U256) -> U256 {
        value.low_bits(self.width()) << self.offset()
    }

    /// Read this field out of a word.
    pub fn extract(self, word: U256) -> U256 {
        (word >> self.offset()).low_bits(self.width())
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Term => "term",
            Field::MaturityTs => "maturity_ts",
            Field::Amount => "amount",
            Field::Apy => "apy",
            Field::RarityScore => "rarity_score",
            Field::RarityFlags => "rarity_flags",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_cover_the_word_exactly() {
        let total: u32 = Field::ALL.iter().map(|f| f.width()).sum();
        assert_eq!(total, 256);
    }

    #[test]
    fn fields_are_contiguous_msb_first() {
        let mut expected_top = 256;
        for field in Field::ALL {
            assert_eq!(field.offset() + field.width(), expected_top, "{}", field.name());
            expected_top = field.offset();
        }
        assert_eq!(expected_top, 0);
    }

    #[test]
    fn placed_masks_do_not_overlap() {
        let mut seen = U256::ZERO;
        for field in Field::ALL {
            let mask = field.place(U256::MAX);
            assert_eq!(seen & mask, U256::ZERO, "{} overlaps", field.name());
            seen = seen | mask;
        }
        assert_eq!(seen, U256::MAX);
    }

    #[test]
    fn term_sits_in_the_top_bits() {
        assert_eq!(Field::Term.place(U256::ONE), U256::ONE << 240);
        assert_eq!(Field::Amount.offset(), 48);
    }
}
