//! # twitchlink-client
//!
//! Resolves a live Twitch channel into playable rendition URLs.
//!
//! Every lookup runs the same pipeline: exchange the channel for a playback
//! access token, fetch the master playlist with it, then parse the playlist
//! into quality-indexed variants. Nothing is cached between calls because
//! access tokens are short-lived.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod provider;
pub mod resolver;
pub mod types;

pub use client::TwitchClient;
pub use config::ClientConfig;
pub use provider::{GqlTokenProvider, LegacyTokenProvider, TokenProvider};
pub use resolver::TwitchStream;

pub use twitchlink_core::{
    AuthToken, ChannelIdentity, Error, HttpError, QualityLabel, Result, StreamMeta,
};
pub use twitchlink_playlist::{ParsedManifest, StreamVariant};
