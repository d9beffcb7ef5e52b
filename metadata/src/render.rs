//! Metadata documents and the renderer trait.

use cinder_codec::BurnRecord;
use cinder_types::{BurnParams, Ordinal};
use serde::{Deserialize, Serialize};

use crate::svg;
use crate::uri::svg_data_uri;

/// One `{ "trait_type": .., "value": .. }` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl ToString) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.to_string(),
        }
    }
}

/// The metadata document of one certificate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    /// A data URI, normally `data:image/svg+xml;base64,...`.
    pub image: String,
    pub attributes: Vec<Attribute>,
}

impl TokenMetadata {
    pub fn attribute(&self, trait_type: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| a.value.as_str())
    }
}

/// Renders a certificate's metadata from its ordinal and decoded record.
pub trait MetadataRenderer {
    fn render(&self, ordinal: Ordinal, record: &BurnRecord) -> TokenMetadata;
}

/// Default renderer: fixed attribute set plus an inline SVG card.
#[derive(Clone, Debug, Default)]
pub struct SvgMetadataRenderer {
    params: BurnParams,
}

impl SvgMetadataRenderer {
    pub fn new(params: BurnParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BurnParams {
        &self.params
    }
}

impl MetadataRenderer for SvgMetadataRenderer {
    fn render(&self, ordinal: Ordinal, record: &BurnRecord) -> TokenMetadata {
        let whole = self.params.whole_of(record.amount);
        let flags = record.flags();

        let mut attributes = vec![
            Attribute::new("Burned", whole),
            Attribute::new("Burned (raw)", record.amount),
            Attribute::new("Burn Timestamp", record.maturity_ts),
            Attribute::new("Rarity Score", record.rarity_score),
            Attribute::new("Prime Ordinal", flags.token_is_prime),
            Attribute::new("Fibonacci Ordinal", flags.token_is_fibonacci),
            Attribute::new("Prime Block", flags.block_is_prime),
            Attribute::new("Fibonacci Block", flags.block_is_fibonacci),
        ];
        if record.apy != 0 {
            attributes.push(Attribute::new("APY", record.apy));
        }
        if record.term != 0 {
            attributes.push(Attribute::new("Term", record.term));
        }

        let image = svg_data_uri(&svg::render_card(
            &self.params.name,
            &self.params.symbol,
            ordinal,
            whole,
            record,
        ));

        TokenMetadata {
            name: format!("{} {}", self.params.name, ordinal),
            description: format!(
                "Certificate of {} {} burned, rarity score {}.",
                whole, self.params.symbol, record.rarity_score
            ),
            image,
            attributes,
        }
    }
}
