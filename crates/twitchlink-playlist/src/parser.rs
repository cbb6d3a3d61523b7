//! Master playlist parser.

use tracing::debug;

use crate::attributes::{parse_attributes, AttributeRecord};
use crate::manifest::{announced_qualities, ParsedManifest, StreamVariant};

pub(crate) const HEADER: &str = "#EXTM3U";
pub(crate) const INFO_TAG: &str = "#EXT-X-TWITCH-INFO";

/// Position inside the media / stream-info / URL triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Cycle {
    #[default]
    ExpectMedia,
    ExpectStreamInfo,
    ExpectUrl,
}

/// Parse the master playlist text served for a channel.
///
/// The header and the info line sit outside the triple cycle. An info line
/// in the middle of a triple is not guarded against; upstream never sends one.
pub fn parse_playlist(text: &str) -> ParsedManifest {
    let mut manifest = ParsedManifest::default();
    let mut cycle = Cycle::default();
    let mut media = AttributeRecord::new();
    let mut stream_info = AttributeRecord::new();
    let mut announced = Vec::new();

    for line in text.split(['\r', '\n']) {
        if line.trim().is_empty() || line == HEADER {
            continue;
        }

        if line.starts_with(INFO_TAG) {
            manifest.twitch_info = parse_attributes(line);
            continue;
        }

        cycle = match cycle {
            Cycle::ExpectMedia => {
                media = parse_attributes(line);
                announced = announced_qualities(&media);
                Cycle::ExpectStreamInfo
            }
            Cycle::ExpectStreamInfo => {
                stream_info = parse_attributes(line);
                Cycle::ExpectUrl
            }
            Cycle::ExpectUrl => {
                let variant = StreamVariant {
                    media: std::mem::take(&mut media),
                    stream_info: std::mem::take(&mut stream_info),
                    url: line.to_string(),
                };
                manifest.insert(variant, std::mem::take(&mut announced));
                Cycle::ExpectMedia
            }
        };
    }

    if cycle != Cycle::ExpectMedia {
        debug!("Playlist ended mid-rendition ({cycle:?}); partial rendition ignored");
    }

    debug!(
        "Parsed {} renditions: {:?}",
        manifest.variants().len(),
        manifest.stream_qualities
    );

    manifest
}
