//! # twitchlink-playlist
//!
//! Parser for the master playlist served by Twitch's delivery endpoint.
//!
//! This is not a general HLS parser. The upstream playlist is a header, an
//! optional `#EXT-X-TWITCH-INFO` line and then fixed triples of
//! `#EXT-X-MEDIA`, `#EXT-X-STREAM-INF` and the rendition URL. Only that
//! shape is recognised.

mod attributes;
mod manifest;
mod parser;
mod value;

pub use attributes::{parse_attributes, AttributeRecord};
pub use manifest::{ParsedManifest, StreamVariant};
pub use parser::parse_playlist;
pub use value::{normalize_value, AttributeValue};
