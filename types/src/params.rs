//! Collection parameters for a burn-certificate deployment.

use serde::{Deserialize, Serialize};

/// Parameters fixed at deployment time.
///
/// `apy` and `term` are written into every record when no reward source
/// overrides them; the remaining fields describe the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnParams {
    /// Collection name shown in certificate metadata.
    #[serde(default = "default_name")]
    pub name: String,

    /// Collection ticker.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Decimals of the burned token, used when rendering whole amounts.
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Reward rate recorded in each certificate (basis points; 0 = none).
    #[serde(default)]
    pub apy: u16,

    /// Term recorded in each certificate (days; 0 = none).
    #[serde(default)]
    pub term: u16,
}

fn default_name() -> String {
    "Cinder Burn".to_string()
}

fn default_symbol() -> String {
    "CNDR".to_string()
}

fn default_decimals() -> u8 {
    18
}

impl BurnParams {
    /// Raw units per whole token, `10^decimals`.
    ///
    /// `None` when the unit does not fit in a u128 (more than 38 decimals).
    pub fn unit(&self) -> Option<u128> {
        10u128.checked_pow(u32::from(self.decimals))
    }

    /// Raw amount of `whole` tokens, saturating at `u128::MAX`.
    pub fn raw_of(&self, whole: u128) -> u128 {
        match self.unit() {
            Some(unit) => whole.saturating_mul(unit),
            None if whole == 0 => 0,
            None => u128::MAX,
        }
    }

    /// Whole tokens in `raw`, truncating the fraction.
    pub fn whole_of(&self, raw: u128) -> u128 {
        self.unit().map_or(0, |unit| raw / unit)
    }
}

impl Default for BurnParams {
    fn default() -> Self {
        Self {
            name: default_name(),
            symbol: default_symbol(),
            decimals: default_decimals(),
            apy: 0,
            term: 0,
        }
    }
}
