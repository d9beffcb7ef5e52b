//! Certificate ordinals.

use crate::error::CinderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequential identifier of a minted certificate.
///
/// The first certificate is ordinal 1. Ordinals are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ordinal(u64);

impl Ordinal {
    /// The ordinal assigned to the first mint.
    pub const FIRST: Self = Self(1);

    pub fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The following ordinal, or `None` once the u64 space is exhausted.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for Ordinal {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for Ordinal {
    type Err = CinderError;

    /// Accepts `17` or `#17`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|e| CinderError::InvalidOrdinal(format!("{s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_next_stops_at_max() {
        assert_eq!(Ordinal::FIRST.checked_next(), Some(Ordinal::new(2)));
        assert_eq!(Ordinal::new(u64::MAX).checked_next(), None);
    }

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!("#5".parse::<Ordinal>().unwrap(), Ordinal::new(5));
        assert_eq!("5".parse::<Ordinal>().unwrap(), Ordinal::new(5));
        assert!("five".parse::<Ordinal>().is_err());
    }
}
