//! Live stream metadata.

use serde::{Deserialize, Serialize};

/// Placeholder title used when metadata is unavailable.
pub const UNKNOWN_TITLE: &str = "Unknown stream title";

/// Placeholder game used when metadata is unavailable.
pub const UNKNOWN_GAME: &str = "Unknown stream game";

/// Current title and game of a live stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamMeta {
    pub title: String,
    pub game: String,
}

impl StreamMeta {
    /// Build metadata, substituting placeholders for missing fields.
    pub fn new(title: Option<String>, game: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            game: game.unwrap_or_else(|| UNKNOWN_GAME.to_string()),
        }
    }

    /// Metadata for a stream we know nothing about.
    pub fn unknown() -> Self {
        Self::new(None, None)
    }

    pub fn is_unknown(&self) -> bool {
        self.title == UNKNOWN_TITLE && self.game == UNKNOWN_GAME
    }
}

impl Default for StreamMeta {
    fn default() -> Self {
        Self::unknown()
    }
}
