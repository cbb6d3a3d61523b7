//! Playback access token exchange.

use tracing::debug;
use twitchlink_core::{AuthToken, ChannelIdentity, Error, Result};

use crate::client::{error_body, read_gql};
use crate::types::{
    GqlRequest, LegacyAccessToken, PlaybackAccessTokenData, PlaybackAccessTokenVariables,
    PLAYBACK_ACCESS_TOKEN_OPERATION, PLAYBACK_ACCESS_TOKEN_QUERY,
};
use crate::TwitchClient;

impl TwitchClient {
    /// Exchange a channel for a playback access token over GraphQL.
    pub async fn playback_access_token(&self, channel: &ChannelIdentity) -> Result<AuthToken> {
        let request = GqlRequest::new(
            PLAYBACK_ACCESS_TOKEN_OPERATION,
            PLAYBACK_ACCESS_TOKEN_QUERY,
            PlaybackAccessTokenVariables {
                login: channel.login().to_string(),
                platform: self.config().platform.clone(),
                player_type: self.config().player_type.clone(),
            },
        );

        let response = self.post_gql(&request, channel.auth()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authorization {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let data: PlaybackAccessTokenData = read_gql(response).await?;
        let token = data.stream_playback_access_token.ok_or_else(|| {
            Error::Api(format!("No playback access token for {}", channel.login()))
        })?;

        debug!("Obtained playback access token for {}", channel.login());
        Ok(AuthToken::new(token.signature, token.value))
    }

    /// Exchange a channel for a playback access token with the legacy keyed GET.
    pub async fn legacy_access_token(&self, channel: &ChannelIdentity) -> Result<AuthToken> {
        let url = Self::parse_url(&format!(
            "{}/api/channels/{}/access_token",
            self.config().legacy_api_url.trim_end_matches('/'),
            channel.login()
        ))?;

        let response = self.get(url, channel.auth()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authorization {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let bytes = response.bytes().await.map_err(Error::transport)?;
        let token: LegacyAccessToken = serde_json::from_slice(&bytes)?;

        debug!("Obtained legacy access token for {}", channel.login());
        Ok(AuthToken::new(token.sig, token.token))
    }
}
