//! Certificate metadata rendering.
//!
//! Turns a decoded burn record into the `{ name, description, image,
//! attributes }` document wallets and marketplaces display, and wraps it as a
//! self-contained `data:application/json;base64,` URI.

pub mod error;
pub mod render;
pub mod svg;
pub mod uri;

pub use error::MetadataError;
pub use render::{Attribute, MetadataRenderer, SvgMetadataRenderer, TokenMetadata};
pub use uri::{parse_svg_uri, parse_token_uri, token_uri, JSON_URI_PREFIX, SVG_URI_PREFIX};
