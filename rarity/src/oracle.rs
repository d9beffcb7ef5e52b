//! Rarity computation from a certificate ordinal and its mint block height.

use cinder_codec::RarityFlags;
use cinder_types::Ordinal;
use serde::{Deserialize, Serialize};

use crate::fibonacci::is_fibonacci;
use crate::primes::is_prime;

/// Score by number of satisfied predicates (index = matches, 0..=4).
const SCORE_BY_MATCHES: [u16; 5] = [0, 10, 100, 1_000, 10_000];

/// Rarity attributes frozen into a certificate at mint time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rarity {
    pub score: u16,
    pub flags: RarityFlags,
}

/// Score for a number of satisfied predicates; strictly increasing in `matches`.
///
/// Counts above four are clamped to four.
pub fn score_for_matches(matches: u32) -> u16 {
    SCORE_BY_MATCHES[(matches as usize).min(SCORE_BY_MATCHES.len() - 1)]
}

/// Evaluate the four predicates and score them.
pub fn compute_rarity(token: Ordinal, block_height: u64) -> Rarity {
    let flags = RarityFlags {
        token_is_prime: is_prime(token.get()),
        token_is_fibonacci: is_fibonacci(token.get()),
        block_is_prime: is_prime(block_height),
        block_is_fibonacci: is_fibonacci(block_height),
    };
    Rarity {
        score: score_for_matches(flags.count()),
        flags,
    }
}

/// Source of rarity for newly minted certificates.
pub trait RaritySource {
    fn compute(&self, token: Ordinal, block_height: u64) -> Rarity;
}

/// The production rarity source: primality and Fibonacci membership.
#[derive(Clone, Copy, Debug, Default)]
pub struct RarityOracle;

impl RaritySource for RarityOracle {
    fn compute(&self, token: Ordinal, block_height: u64) -> Rarity {
        compute_rarity(token, block_height)
    }
}
