//! Account identifiers, displayed as `0x`-prefixed hex.

use crate::error::CinderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 20-byte account identifier.
///
/// `AccountId::ZERO` is the null account: it never owns a certificate and is
/// rejected as a transfer target.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct AccountId([u8; 20]);

impl AccountId {
    pub const LEN: usize = 20;

    /// The null account.
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Build an account whose last 8 bytes are `n` in big-endian order.
    pub fn from_low_u64(n: u64) -> Self {
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId(0x{}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountId {
    type Err = CinderError;

    /// Parse a 40-digit hex string, with or without the `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| CinderError::InvalidHex(e.to_string()))?;
        let arr: [u8; 20] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CinderError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_account_is_zero() {
        assert!(AccountId::ZERO.is_zero());
        assert!(!AccountId::from_low_u64(1).is_zero());
    }

    #[test]
    fn display_parses_back() {
        let account = AccountId::from_low_u64(0xdead_beef);
        let shown = account.to_string();
        assert!(shown.starts_with("0x"));
        assert_eq!(shown.len(), 42);
        assert_eq!(shown.parse::<AccountId>().unwrap(), account);
    }

    #[test]
    fn from_low_u64_fills_the_last_eight_bytes() {
        let account = AccountId::from_low_u64(0x0102_0304_0506_0708);
        assert_eq!(account.as_bytes()[..12], [0u8; 12]);
        assert_eq!(account.as_bytes()[12..], [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn parse_accepts_unprefixed_hex() {
        let parsed: AccountId = "00000000000000000000000000000000000000ff".parse().unwrap();
        assert_eq!(parsed, AccountId::from_low_u64(0xff));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "0x1234".parse::<AccountId>().unwrap_err();
        assert_eq!(
            err,
            CinderError::InvalidLength {
                expected: 20,
                actual: 2
            }
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(matches!(
            "0xzz".parse::<AccountId>(),
            Err(CinderError::InvalidHex(_))
        ));
    }
}
