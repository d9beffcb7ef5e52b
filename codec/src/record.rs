//! The packed record word and its logical view.

use crate::error::CodecError;
use crate::flags::RarityFlags;
use crate::layout::Field;
use crate::word::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw encoder inputs, one full-width integer per field.
///
/// Any value is accepted; `PackedRecord::encode` keeps `value mod 2^width`
/// of each. Truncation is used rather than saturation: a value such as
/// `2^64 + 5` in the 64-bit `maturity_ts` field decodes as `5`, not as
/// `2^64 - 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub term: U256,
    pub maturity_ts: U256,
    pub amount: U256,
    pub apy: U256,
    pub rarity_score: U256,
    pub rarity_flags: U256,
}

impl RecordFields {
    pub fn get(&self, field: Field) -> U256 {
        match field {
            Field::Term => self.term,
            Field::MaturityTs => self.maturity_ts,
            Field::Amount => self.amount,
            Field::Apy => self.apy,
            Field::RarityScore => self.rarity_score,
            Field::RarityFlags => self.rarity_flags,
        }
    }

    pub fn set(&mut self, field: Field, value: U256) {
        match field {
            Field::Term => self.term = value,
            Field::MaturityTs => self.maturity_ts = value,
            Field::Amount => self.amount = value,
            Field::Apy => self.apy = value,
            Field::RarityScore => self.rarity_score = value,
            Field::RarityFlags => self.rarity_flags = value,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<U256>) -> Self {
        self.set(field, value.into());
        self
    }
}

/// Logical view of a certificate's attributes, every field in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRecord {
    pub term: u16,
    /// Block timestamp at mint time.
    pub maturity_ts: u64,
    /// Raw token units debited by the burn.
    pub amount: u128,
    pub apy: u16,
    pub rarity_score: u16,
    /// Raw flag field; see [`BurnRecord::flags`].
    pub rarity_flags: u16,
}

impl BurnRecord {
    pub fn flags(&self) -> RarityFlags {
        RarityFlags::decode(self.rarity_flags)
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            term: self.term.into(),
            maturity_ts: self.maturity_ts.into(),
            amount: self.amount.into(),
            apy: self.apy.into(),
            rarity_score: self.rarity_score.into(),
            rarity_flags: self.rarity_flags.into(),
        }
    }

    pub fn pack(&self) -> PackedRecord {
        PackedRecord::encode(&self.fields())
    }
}

impl From<&BurnRecord> for RecordFields {
    fn from(record: &BurnRecord) -> Self {
        record.fields()
    }
}

/// A certificate's attributes packed into one 256-bit word.
///
/// This is the only persisted form of a burn record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackedRecord(U256);

impl PackedRecord {
    pub fn encode(fields: &RecordFields) -> Self {
        let word = Field::ALL
            .iter()
            .fold(U256::ZERO, |word, &field| word | field.place(fields.get(field)));
        Self(word)
    }

    pub fn decode(&self) -> BurnRecord {
        BurnRecord {
            term: self.field(Field::Term).low_u128() as u16,
            maturity_ts: self.field(Field::MaturityTs).low_u128() as u64,
            amount: self.field(Field::Amount).low_u128(),
            apy: self.field(Field::Apy).low_u128() as u16,
            rarity_score: self.field(Field::RarityScore).low_u128() as u16,
            rarity_flags: self.field(Field::RarityFlags).low_u128() as u16,
        }
    }

    /// A single field, always in `[0, 2^width - 1]`.
    pub fn field(&self, field: Field) -> U256 {
        field.extract(self.0)
    }

    pub fn from_word(word: U256) -> Self {
        Self(word)
    }

    pub fn word(&self) -> U256 {
        self.0
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }
}

impl fmt::Display for PackedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PackedRecord {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<U256>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BurnRecord {
        BurnRecord {
            term: 0,
            maturity_ts: 2,
            amount: 3,
            apy: 0,
            rarity_score: 5,
            rarity_flags: 6,
        }
    }

    #[test]
    fn small_values_roundtrip() {
        assert_eq!(sample().pack().decode(), sample());
    }

    #[test]
    fn full_range_values_roundtrip() {
        let record = BurnRecord {
            term: u16::MAX,
            maturity_ts: u64::MAX,
            amount: u128::MAX,
            apy: u16::MAX,
            rarity_score: u16::MAX,
            rarity_flags: u16::MAX,
        };
        let packed = record.pack();
        assert_eq!(packed.word(), U256::MAX);
        assert_eq!(packed.decode(), record);
    }

    #[test]
    fn zero_record_is_zero_word() {
        assert_eq!(BurnRecord::default().pack().word(), U256::ZERO);
    }

    #[test]
    fn maturity_overflow_truncates_only_that_field() {
        let fields = sample().fields().with(Field::MaturityTs, U256::MAX);
        let decoded = PackedRecord::encode(&fields).decode();
        assert_eq!(decoded.maturity_ts, u64::MAX);
        assert_eq!(decoded.amount, 3);
        assert_eq!(decoded.rarity_score, 5);
        assert_eq!(decoded.rarity_flags, 6);
        assert_eq!(decoded.term, 0);
    }

    #[test]
    fn amount_overflow_truncates_only_that_field() {
        let fields = sample().fields().with(Field::Amount, U256::MAX);
        let decoded = PackedRecord::encode(&fields).decode();
        assert_eq!(decoded.amount, u128::MAX);
        assert_eq!(decoded.maturity_ts, 2);
        assert_eq!(decoded.apy, 0);
        assert_eq!(decoded.rarity_score, 5);
    }

    #[test]
    fn rarity_score_overflow_truncates_only_that_field() {
        let fields = sample().fields().with(Field::RarityScore, U256::MAX);
        let decoded = PackedRecord::encode(&fields).decode();
        assert_eq!(decoded.rarity_score, u16::MAX);
        assert_eq!(decoded.maturity_ts, 2);
        assert_eq!(decoded.amount, 3);
        assert_eq!(decoded.rarity_flags, 6);
    }

    #[test]
    fn rarity_flags_overflow_truncates_only_that_field() {
        let fields = sample().fields().with(Field::RarityFlags, U256::MAX);
        let decoded = PackedRecord::encode(&fields).decode();
        assert_eq!(decoded.rarity_flags, u16::MAX);
        assert_eq!(decoded.rarity_score, 5);
        assert_eq!(decoded.amount, 3);
    }

    #[test]
    fn term_and_apy_overflow_truncate() {
        let fields = sample()
            .fields()
            .with(Field::Term, U256::MAX)
            .with(Field::Apy, U256::MAX);
        let decoded = PackedRecord::encode(&fields).decode();
        assert_eq!(decoded.term, u16::MAX);
        assert_eq!(decoded.apy, u16::MAX);
        assert_eq!(decoded.maturity_ts, 2);
        assert_eq!(decoded.rarity_score, 5);
    }

    #[test]
    fn partial_overflow_is_modulo_not_clamp() {
        // 2^64 + 5 in a 64-bit field: truncation gives 5, a clamp would give 2^64 - 1.
        let value = (U256::ONE << 64) | U256::from(5u8);
        let fields = sample().fields().with(Field::MaturityTs, value);
        assert_eq!(PackedRecord::encode(&fields).decode().maturity_ts, 5);

        // Mid-range high part in the amount field.
        let value = U256::from_halves(0x1234, 77);
        let fields = sample().fields().with(Field::Amount, value);
        assert_eq!(PackedRecord::encode(&fields).decode().amount, 77);
    }

    #[test]
    fn display_parses_back() {
        let packed = sample().pack();
        let shown = packed.to_string();
        assert_eq!(shown.parse::<PackedRecord>().unwrap(), packed);
    }

    #[test]
    fn bytes_roundtrip() {
        let packed = sample().pack();
        assert_eq!(PackedRecord::from_bytes(packed.to_bytes()), packed);
        assert_eq!(packed.to_bytes()[31], 6);
    }
}
