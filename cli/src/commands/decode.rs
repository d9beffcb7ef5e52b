//! `cinder decode <hex>`: unpack a 256-bit record word.

use anyhow::{Context, Result};
use cinder_codec::PackedRecord;
use cinder_types::BurnParams;

use super::describe_flags;

/// Whole-token amounts are shown with the decimals in `params`.
pub fn run(word: &str, json: bool, params: &BurnParams) -> Result<String> {
    let packed: PackedRecord = word
        .trim()
        .parse()
        .with_context(|| format!("cannot parse record word `{word}`"))?;
    let record = packed.decode();

    if json {
        return serde_json::to_string_pretty(&record).context("cannot encode record as JSON");
    }

    Ok(format!(
        "word:          {packed}\n\
         term:          {}\n\
         maturity_ts:   {}\n\
         amount:        {} ({} whole)\n\
         apy:           {}\n\
         rarity_score:  {}\n\
         rarity_flags:  {:#06x} ({})",
        record.term,
        record.maturity_ts,
        record.amount,
        params.whole_of(record.amount),
        record.apy,
        record.rarity_score,
        record.rarity_flags,
        describe_flags(record.flags()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_codec::{BurnRecord, RarityFlags};

    #[test]
    fn decodes_a_packed_word() {
        let record = BurnRecord {
            term: 30,
            maturity_ts: 1_700_000_000,
            amount: BurnParams::default().raw_of(5),
            apy: 250,
            rarity_score: 100,
            rarity_flags: RarityFlags::new(true, true, false, false).encode(),
        };
        let out = run(&record.pack().to_string(), false, &BurnParams::default()).unwrap();
        assert!(out.contains("term:          30"));
        assert!(out.contains("(5 whole)"));
        assert!(out.contains("prime-ordinal,fibonacci-ordinal"));
    }

    #[test]
    fn whole_amount_uses_configured_decimals() {
        let params = BurnParams {
            decimals: 6,
            ..BurnParams::default()
        };
        let record = BurnRecord {
            amount: 7_000_000,
            ..BurnRecord::default()
        };
        let out = run(&record.pack().to_string(), false, &params).unwrap();
        assert!(out.contains("amount:        7000000 (7 whole)"));
    }

    #[test]
    fn json_output_parses_back() {
        let record = BurnRecord {
            amount: 42,
            ..BurnRecord::default()
        };
        let out = run(&record.pack().to_string(), true, &BurnParams::default()).unwrap();
        let parsed: BurnRecord = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn all_ones_word_decodes_to_field_maxima() {
        let out = run(&format!("0x{}", "f".repeat(64)), true, &BurnParams::default()).unwrap();
        let parsed: BurnRecord = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.amount, u128::MAX);
        assert_eq!(parsed.maturity_ts, u64::MAX);
        assert_eq!(parsed.rarity_flags, u16::MAX);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(run("0xzz", false, &BurnParams::default()).is_err());
    }
}
