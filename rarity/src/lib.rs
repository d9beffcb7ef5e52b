//! Rarity oracle: number-theoretic predicates behind a certificate's rarity.
//!
//! A certificate's rarity is fixed at mint time from two integers: its
//! ordinal and the height of the block it was minted in. Each is tested for
//! primality and for membership in the Fibonacci sequence; the four results
//! become the record's rarity flags and the number of hits its score.
//!
//! Everything here is pure and exact over the full `u64` range.

pub mod fibonacci;
pub mod oracle;
pub mod primes;

pub use fibonacci::is_fibonacci;
pub use oracle::{compute_rarity, score_for_matches, Rarity, RarityOracle, RaritySource};
pub use primes::is_prime;
