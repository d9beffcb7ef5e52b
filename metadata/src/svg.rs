//! The certificate card artwork.

use cinder_codec::BurnRecord;
use cinder_types::Ordinal;

/// Background colours by rarity tier, lowest first.
const TIER_COLOURS: [&str; 5] = ["#3b3b3b", "#5a3d1e", "#8a2b0c", "#b3160b", "#ff4d00"];

fn tier(score: u16) -> usize {
    match score {
        0 => 0,
        1..=10 => 1,
        11..=100 => 2,
        101..=1_000 => 3,
        _ => 4,
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// A 350×350 card. Always starts with `<svg` and ends with `</svg>`.
pub fn render_card(
    collection: &str,
    symbol: &str,
    ordinal: Ordinal,
    whole_amount: u128,
    record: &BurnRecord,
) -> String {
    let background = TIER_COLOURS[tier(record.rarity_score)];
    let flags = record.flags();
    let marks: String = [
        (flags.token_is_prime, "P"),
        (flags.token_is_fibonacci, "F"),
        (flags.block_is_prime, "p"),
        (flags.block_is_fibonacci, "f"),
    ]
    .iter()
    .map(|&(set, mark)| if set { mark } else { "·" })
    .collect();

    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="350" height="350" viewBox="0 0 350 350">"##,
            r##"<rect width="350" height="350" rx="16" fill="{bg}"/>"##,
            r##"<text x="24" y="48" font-family="monospace" font-size="20" fill="#fff">{collection}</text>"##,
            r##"<text x="24" y="84" font-family="monospace" font-size="32" fill="#fff">{ordinal}</text>"##,
            r##"<text x="24" y="150" font-family="monospace" font-size="16" fill="#fff">Burned: {amount} {symbol}</text>"##,
            r##"<text x="24" y="180" font-family="monospace" font-size="16" fill="#fff">Timestamp: {ts}</text>"##,
            r##"<text x="24" y="210" font-family="monospace" font-size="16" fill="#fff">Rarity: {score}</text>"##,
            r##"<text x="24" y="320" font-family="monospace" font-size="24" fill="#fff">{marks}</text>"##,
            "</svg>"
        ),
        bg = background,
        collection = escape(collection),
        ordinal = ordinal,
        amount = whole_amount,
        symbol = escape(symbol),
        ts = record.maturity_ts,
        score = record.rarity_score,
        marks = marks,
    )
}
