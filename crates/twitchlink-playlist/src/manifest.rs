//! Parsed manifest data model.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;
use twitchlink_core::{QualityLabel, AUDIO_QUALITY, SOURCE_QUALITY};

use crate::attributes::AttributeRecord;
use crate::value::AttributeValue;

/// Marker the upstream appends to the name of the source rendition.
const SOURCE_MARKER: &str = "(source)";

/// Name of the audio-only rendition.
const AUDIO_ONLY_NAME: &str = "audio_only";

/// One rendition of a live stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreamVariant {
    /// Attributes of the `#EXT-X-MEDIA` line.
    pub media: AttributeRecord,
    /// Attributes of the `#EXT-X-STREAM-INF` line.
    pub stream_info: AttributeRecord,
    /// Rendition playlist URL.
    pub url: String,
}

impl StreamVariant {
    /// Rendition name as announced upstream, e.g. `"1080p60 (source)"`.
    pub fn name(&self) -> Option<String> {
        self.media.get("name").map(ToString::to_string)
    }

    pub fn is_source(&self) -> bool {
        self.name().is_some_and(|name| name.contains(SOURCE_MARKER))
    }

    pub fn is_audio_only(&self) -> bool {
        self.media.get_str("type") == Some("AUDIO")
    }

    pub fn resolution(&self) -> Option<&str> {
        self.stream_info.get_str("resolution")
    }

    pub fn bandwidth(&self) -> Option<f64> {
        self.stream_info.get("bandwidth").and_then(AttributeValue::as_f64)
    }

    pub fn frame_rate(&self) -> Option<f64> {
        self.stream_info.get("frame_rate").and_then(AttributeValue::as_f64)
    }
}

/// The structured form of a channel's master playlist.
///
/// Every label in `stream_qualities` has an entry in `streams`. The source
/// rendition is reachable both as `"source"` and by its own name; both keys
/// share one [`StreamVariant`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedManifest {
    /// Attributes of the `#EXT-X-TWITCH-INFO` line.
    pub twitch_info: AttributeRecord,
    /// Variants keyed by quality label.
    pub streams: HashMap<QualityLabel, Arc<StreamVariant>>,
    /// Quality labels in playlist order, aliases included.
    pub stream_qualities: Vec<QualityLabel>,
    #[serde(skip)]
    variants: Vec<Arc<StreamVariant>>,
}

impl ParsedManifest {
    /// Variant stored under a quality label.
    pub fn get(&self, quality: &str) -> Option<&StreamVariant> {
        self.streams.get(quality).map(AsRef::as_ref)
    }

    /// URL stored under a quality label.
    pub fn url(&self, quality: &str) -> Option<&str> {
        self.get(quality).map(|variant| variant.url.as_str())
    }

    /// First candidate (in the caller's order) that the playlist offers.
    pub fn select<'a, S: AsRef<str>>(
        &'a self,
        candidates: &'a [S],
    ) -> Option<(&'a str, &'a StreamVariant)> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|quality| self.stream_qualities.iter().any(|q| q == quality))
            .find_map(|quality| self.get(quality).map(|variant| (quality, variant)))
    }

    /// Finalized variants in playlist order, each listed once.
    pub fn variants(&self) -> &[Arc<StreamVariant>] {
        &self.variants
    }

    /// The first variant (source), or the last one (audio) when `audio_only`.
    pub fn default_variant(&self, audio_only: bool) -> Option<&StreamVariant> {
        let variant = if audio_only {
            self.variants.last()
        } else {
            self.variants.first()
        };
        variant.map(AsRef::as_ref)
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Render the manifest back into upstream playlist text.
    pub fn to_m3u8(&self) -> String {
        let mut lines = vec![crate::parser::HEADER.to_string()];

        if !self.twitch_info.is_empty() {
            lines.push(format!(
                "{}:{}",
                crate::parser::INFO_TAG,
                self.twitch_info.to_attribute_list()
            ));
        }

        for variant in &self.variants {
            lines.push(format!("#EXT-X-MEDIA:{}", variant.media.to_attribute_list()));
            lines.push(format!(
                "#EXT-X-STREAM-INF:{}",
                variant.stream_info.to_attribute_list()
            ));
            lines.push(variant.url.clone());
        }

        lines.join("\n")
    }

    /// Store a completed variant under its quality label(s).
    ///
    /// `announced` are the labels its media line announced; they are only
    /// committed together with the variant so every label stays resolvable.
    pub(crate) fn insert(&mut self, variant: StreamVariant, announced: Vec<QualityLabel>) {
        self.stream_qualities.extend(announced);
        let variant = Arc::new(variant);

        match variant.name() {
            Some(name) if name.contains(SOURCE_MARKER) => {
                self.streams
                    .insert(SOURCE_QUALITY.to_string(), Arc::clone(&variant));
                self.streams
                    .insert(strip_source_marker(&name), Arc::clone(&variant));
            }
            Some(name) if name == AUDIO_ONLY_NAME => {
                self.streams
                    .insert(AUDIO_QUALITY.to_string(), Arc::clone(&variant));
            }
            Some(name) => {
                self.streams.insert(name, Arc::clone(&variant));
            }
            None => warn!("Rendition {} has no name; not indexed", variant.url),
        }

        self.variants.push(variant);
    }
}

/// Quality labels announced by a media line.
pub(crate) fn announced_qualities(media: &AttributeRecord) -> Vec<QualityLabel> {
    let name = media.get("name").map(ToString::to_string);

    match (media.get_str("type"), name) {
        (Some("VIDEO"), Some(name)) if name.contains(SOURCE_MARKER) => {
            vec![SOURCE_QUALITY.to_string(), strip_source_marker(&name)]
        }
        (Some("VIDEO"), Some(name)) => vec![name],
        (Some("VIDEO"), None) => {
            warn!("Video rendition without a name");
            Vec::new()
        }
        (Some("AUDIO"), _) => vec![AUDIO_QUALITY.to_string()],
        _ => Vec::new(),
    }
}

fn strip_source_marker(name: &str) -> String {
    name.replace(SOURCE_MARKER, "").trim().to_string()
}
