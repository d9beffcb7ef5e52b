#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_rarity::{compute_rarity, is_prime, score_for_matches};
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

// The oracle never panics, its score matches its flags, and primality
// agrees with trial division wherever that is cheap.
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let mut token = [0u8; 8];
    let mut height = [0u8; 8];
    token.copy_from_slice(&data[..8]);
    height.copy_from_slice(&data[8..16]);
    let token = u64::from_le_bytes(token);
    let height = u64::from_le_bytes(height);

    let rarity = compute_rarity(Ordinal::new(token), height);
    assert_eq!(rarity.score, score_for_matches(rarity.flags.count()));

    let small = token % 1_000_000;
    assert_eq!(is_prime(small), trial_division(small));
});
