//! `cinder rarity <ordinal> <height>`: evaluate the rarity predicates.

use cinder_rarity::{compute_rarity, is_fibonacci, is_prime};
use cinder_types::Ordinal;

use super::describe_flags;

pub fn run(ordinal: Ordinal, height: u64) -> String {
    let rarity = compute_rarity(ordinal, height);
    format!(
        "ordinal {ordinal}: prime={} fibonacci={}\n\
         block {height}: prime={} fibonacci={}\n\
         score: {} ({})\n\
         flags: {:#06x}",
        is_prime(ordinal.get()),
        is_fibonacci(ordinal.get()),
        is_prime(height),
        is_fibonacci(height),
        rarity.score,
        describe_flags(rarity.flags),
        rarity.flags.encode(),
    )
}
