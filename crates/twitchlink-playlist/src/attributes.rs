//! Attribute-line parsing (`#EXT-X-TAG:KEY="value",OTHER=1`).

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::value::{normalize_value, AttributeValue};

/// Attributes of one playlist tag line, in the order they appeared.
///
/// Keys are lower-cased with `-` replaced by `_`. Insertion order matters:
/// comma repair in [`parse_attributes`] looks keys up by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeRecord {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeRecord {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Get a value only if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a value. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) -> Option<AttributeValue> {
        let key = key.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Key at `index` in insertion order.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render back into `KEY=value` form. Strings are quoted, dashes restored.
    pub fn to_attribute_list(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                let key = key.replace('_', "-").to_uppercase();
                match value {
                    AttributeValue::String(s) => format!("{key}=\"{s}\""),
                    other => format!("{key}={other}"),
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Serialize for AttributeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parse one tag line into an [`AttributeRecord`].
///
/// Everything after the first `:` is split on `,`. Quoted values are not
/// escaped upstream, so a value such as `CODECS="avc1.64002A,mp4a.40.2"`
/// arrives as two tokens; a token without `=` is appended to the key one
/// position back in the record. That lookup is positional, so a second
/// broken value on the same line is attached to the wrong key or dropped.
pub fn parse_attributes(line: &str) -> AttributeRecord {
    let mut record = AttributeRecord::new();

    let Some((_, attributes)) = line.split_once(':') else {
        return record;
    };

    for (index, token) in attributes.split(',').enumerate() {
        let token = token.replace('"', "");

        if let Some((key, value)) = token.split_once('=') {
            record.insert(normalize_key(key), normalize_value(value));
            continue;
        }

        let previous = index
            .checked_sub(1)
            .and_then(|i| record.key_at(i))
            .map(str::to_owned);

        match previous {
            Some(key) => {
                let joined = match record.get(&key) {
                    Some(value) => format!("{value},{token}"),
                    None => format!(",{token}"),
                };
                record.insert(key, normalize_value(&joined));
            }
            None => debug!("Dropping attribute token {token:?} with no preceding key"),
        }
    }

    apply_upstream_quirks(&mut record);
    record
}

fn normalize_key(key: &str) -> String {
    key.replace('-', "_").to_lowercase()
}

/// The audio-only rendition is announced as `TYPE=VIDEO,NAME="audio_only"`
/// with `VIDEO="audio_only"` on its stream-info line.
fn apply_upstream_quirks(record: &mut AttributeRecord) {
    if record.contains_key("type") {
        if record.get_str("name") == Some("audio_only") {
            record.insert("type", AttributeValue::from("AUDIO"));
        }
    } else if record.get_str("video") == Some("audio_only") {
        record.remove("video");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_media_line() {
        let record = parse_attributes(
            r#"#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="chunked",NAME="1080p60 (source)",AUTOSELECT=YES,DEFAULT=YES"#,
        );

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            ["type", "group_id", "name", "autoselect", "default"]
        );
        assert_eq!(record.get_str("type"), Some("VIDEO"));
        assert_eq!(record.get_str("name"), Some("1080p60 (source)"));
        assert_eq!(record.get("autoselect"), Some(&AttributeValue::Bool(true)));
    }

    #[test]
    fn test_repairs_comma_in_quoted_value() {
        let record = parse_attributes(
            r#"#EXT-X-STREAM-INF:BANDWIDTH=8534030,RESOLUTION=1920x1080,CODECS="avc1.64002A,mp4a.40.2",VIDEO="chunked",FRAME-RATE=60.000"#,
        );

        assert_eq!(record.get("bandwidth"), Some(&AttributeValue::Number(8_534_030.0)));
        assert_eq!(record.get_str("resolution"), Some("1920x1080"));
        assert_eq!(record.get_str("codecs"), Some("avc1.64002A,mp4a.40.2"));
        // The repair consumed one token, so later keys still line up.
        assert_eq!(record.get_str("video"), Some("chunked"));
        assert_eq!(record.get("frame_rate"), Some(&AttributeValue::Number(60.0)));
    }

    #[test]
    fn test_second_repair_is_positional() {
        let record = parse_attributes(r#"#EXT-X-TEST:A="1,2",B="3,4""#);

        assert_eq!(record.get_str("a"), Some("1,2"));
        // Index 3 has no key behind it once the first repair shifted positions.
        assert_eq!(record.get("b"), Some(&AttributeValue::Number(3.0)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_repair_renormalizes_numbers() {
        let record = parse_attributes(r#"#EXT-X-TEST:SIZE="1920,1080""#);
        assert_eq!(record.get_str("size"), Some("1920,1080"));
    }

    #[test]
    fn test_value_keeps_equals_signs() {
        let record = parse_attributes("#EXT-X-TEST:URI=https://example.com/a?b=c");
        assert_eq!(record.get_str("uri"), Some("https://example.com/a?b=c"));
    }

    #[test]
    fn test_audio_only_media_is_audio() {
        let record = parse_attributes(
            r#"#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="audio_only",NAME="audio_only",AUTOSELECT=NO,DEFAULT=NO"#,
        );
        assert_eq!(record.get_str("type"), Some("AUDIO"));
        assert_eq!(record.get("default"), Some(&AttributeValue::Bool(false)));
    }

    #[test]
    fn test_audio_only_stream_info_drops_video() {
        let record =
            parse_attributes(r#"#EXT-X-STREAM-INF:BANDWIDTH=160000,CODECS="mp4a.40.2",VIDEO="audio_only""#);
        assert!(!record.contains_key("video"));
        assert_eq!(record.get_str("codecs"), Some("mp4a.40.2"));
    }

    #[test]
    fn test_line_without_colon() {
        assert!(parse_attributes("#EXT-X-INDEPENDENT-SEGMENTS").is_empty());
    }

    #[test]
    fn test_leading_token_without_key_is_dropped() {
        let record = parse_attributes("#EXT-X-TEST:orphan,KEY=value");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get_str("key"), Some("value"));
    }

    #[test]
    fn test_record_serializes_in_order() {
        let record = parse_attributes("#EXT-X-TEST:Z=1,A=two");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"z":1.0,"a":"two"}"#);
    }

    #[test]
    fn test_attribute_list_rendering() {
        let record = parse_attributes(r#"#EXT-X-TEST:GROUP-ID="chunked",BANDWIDTH=100,DEFAULT=YES"#);
        assert_eq!(
            record.to_attribute_list(),
            r#"GROUP-ID="chunked",BANDWIDTH=100,DEFAULT=true"#
        );
    }

    proptest! {
        #[test]
        fn prop_keys_are_normalized(
            pairs in proptest::collection::vec(("[A-Za-z][A-Za-z-]{0,10}", "[a-z0-9]{1,8}"), 1..6)
        ) {
            let line = format!(
                "#EXT-X-TEST:{}",
                pairs
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{v}\""))
                    .collect::<Vec<_>>()
                    .join(",")
            );
            let record = parse_attributes(&line);

            for (key, value) in &pairs {
                let normalized = key.replace('-', "_").to_lowercase();
                prop_assert!(record.keys().all(|k| !k.contains('-') && k == k.to_lowercase()));
                prop_assert!(record.contains_key(&normalized));
                // Later duplicates win, so only check the last occurrence.
                let last = pairs
                    .iter()
                    .rev()
                    .find(|(k, _)| k.replace('-', "_").to_lowercase() == normalized)
                    .map(|(_, v)| v);
                if last == Some(value) {
                    prop_assert_eq!(record.get(&normalized), Some(&normalize_value(value)));
                }
            }
        }
    }
}
