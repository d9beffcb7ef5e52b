use proptest::prelude::*;

use cinder_rarity::{compute_rarity, is_fibonacci, is_prime, score_for_matches};
use cinder_types::Ordinal;

fn trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

proptest! {
    /// Miller–Rabin agrees with trial division.
    #[test]
    fn is_prime_matches_trial_division(n in 0u64..2_000_000) {
        prop_assert_eq!(is_prime(n), trial_division(n));
    }

    /// A product of two factors above one is never prime.
    #[test]
    fn products_are_composite(a in 2u64..4_000_000_000, b in 2u64..4_000_000_000) {
        prop_assert!(!is_prime(a * b));
    }

    /// Fibonacci membership agrees with generating the sequence.
    #[test]
    fn is_fibonacci_matches_sequence(n in 0u64..10_000_000) {
        let (mut a, mut b) = (0u64, 1u64);
        while b < n {
            let next = a + b;
            a = b;
            b = next;
        }
        prop_assert_eq!(is_fibonacci(n), n == 0 || b == n);
    }

    /// The score is a function of the number of set flags only.
    #[test]
    fn score_follows_flag_count(token in 1u64..u64::MAX, block in any::<u64>()) {
        let rarity = compute_rarity(Ordinal::new(token), block);
        prop_assert_eq!(rarity.score, score_for_matches(rarity.flags.count()));
    }

    /// Flags are exactly the four predicates.
    #[test]
    fn flags_match_predicates(token in 1u64..1_000_000, block in 0u64..100_000_000) {
        let rarity = compute_rarity(Ordinal::new(token), block);
        prop_assert_eq!(rarity.flags.token_is_prime, is_prime(token));
        prop_assert_eq!(rarity.flags.token_is_fibonacci, is_fibonacci(token));
        prop_assert_eq!(rarity.flags.block_is_prime, is_prime(block));
        prop_assert_eq!(rarity.flags.block_is_fibonacci, is_fibonacci(block));
    }

    /// Same inputs, same rarity.
    #[test]
    fn rarity_is_deterministic(token in any::<u64>(), block in any::<u64>()) {
        prop_assert_eq!(
            compute_rarity(Ordinal::new(token), block),
            compute_rarity(Ordinal::new(token), block)
        );
    }
}
