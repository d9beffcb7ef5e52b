//! Subcommand implementations. Each returns the text to print.

pub mod decode;
pub mod rarity;
pub mod simulate;

use cinder_codec::RarityFlags;

/// Comma-separated names of the predicates that hold, or `none`.
pub(crate) fn describe_flags(flags: RarityFlags) -> String {
    let names = [
        (flags.token_is_prime, "prime-ordinal"),
        (flags.token_is_fibonacci, "fibonacci-ordinal"),
        (flags.block_is_prime, "prime-block"),
        (flags.block_is_fibonacci, "fibonacci-block"),
    ];
    let set: Vec<&str> = names
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect();
    if set.is_empty() {
        "none".to_string()
    } else {
        set.join(",")
    }
}
