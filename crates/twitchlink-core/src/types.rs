//! Core domain types for twitchlink.

pub mod channel;
pub mod meta;
pub mod token;

pub use channel::ChannelIdentity;
pub use meta::StreamMeta;
pub use token::AuthToken;

/// Human-readable identifier for a rendition (e.g. `"source"`, `"720p60"`, `"audio"`).
pub type QualityLabel = String;

/// Reserved label under which the source rendition is aliased.
pub const SOURCE_QUALITY: &str = "source";

/// Reserved label for the audio-only rendition.
pub const AUDIO_QUALITY: &str = "audio";
