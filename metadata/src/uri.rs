//! Base64 data URIs for metadata documents and images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cinder_codec::BurnRecord;
use cinder_types::Ordinal;

use crate::error::MetadataError;
use crate::render::{MetadataRenderer, TokenMetadata};

pub const JSON_URI_PREFIX: &str = "data:application/json;base64,";
pub const SVG_URI_PREFIX: &str = "data:image/svg+xml;base64,";

pub(crate) fn svg_data_uri(svg: &str) -> String {
    format!("{SVG_URI_PREFIX}{}", STANDARD.encode(svg))
}

/// Render a certificate and wrap its JSON as a data URI.
pub fn token_uri<M: MetadataRenderer + ?Sized>(
    renderer: &M,
    ordinal: Ordinal,
    record: &BurnRecord,
) -> Result<String, MetadataError> {
    let json = serde_json::to_string(&renderer.render(ordinal, record))?;
    Ok(format!("{JSON_URI_PREFIX}{}", STANDARD.encode(json)))
}

/// Inverse of [`token_uri`].
pub fn parse_token_uri(uri: &str) -> Result<TokenMetadata, MetadataError> {
    let encoded = uri
        .strip_prefix(JSON_URI_PREFIX)
        .ok_or(MetadataError::InvalidUri { expected: "JSON" })?;
    let bytes = STANDARD.decode(encoded)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode an image data URI back to its SVG text.
pub fn parse_svg_uri(uri: &str) -> Result<String, MetadataError> {
    let encoded = uri
        .strip_prefix(SVG_URI_PREFIX)
        .ok_or(MetadataError::InvalidUri { expected: "SVG" })?;
    let bytes = STANDARD.decode(encoded)?;
    String::from_utf8(bytes).map_err(|_| MetadataError::InvalidUri { expected: "UTF-8 SVG" })
}
