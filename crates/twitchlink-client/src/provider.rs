//! Playback access token providers.
//!
//! Twitch has exposed two generations of the token exchange: a keyed GET on
//! the old REST API and the GraphQL `streamPlaybackAccessToken` query. Each
//! generation is one [`TokenProvider`].

use async_trait::async_trait;
use twitchlink_core::{AuthToken, ChannelIdentity, Result};

use crate::TwitchClient;

/// Exchanges a channel identity for a signed playback access token.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn access_token(
        &self,
        client: &TwitchClient,
        channel: &ChannelIdentity,
    ) -> Result<AuthToken>;
}

/// GraphQL token exchange. This is the protocol the web player uses today.
#[derive(Debug, Clone, Copy, Default)]
pub struct GqlTokenProvider;

#[async_trait]
impl TokenProvider for GqlTokenProvider {
    fn name(&self) -> &'static str {
        "gql"
    }

    async fn access_token(
        &self,
        client: &TwitchClient,
        channel: &ChannelIdentity,
    ) -> Result<AuthToken> {
        client.playback_access_token(channel).await
    }
}

/// Keyed GET against `/api/channels/{login}/access_token`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTokenProvider;

#[async_trait]
impl TokenProvider for LegacyTokenProvider {
    fn name(&self) -> &'static str {
        "legacy"
    }

    async fn access_token(
        &self,
        client: &TwitchClient,
        channel: &ChannelIdentity,
    ) -> Result<AuthToken> {
        client.legacy_access_token(channel).await
    }
}
