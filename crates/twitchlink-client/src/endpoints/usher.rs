//! Master playlist retrieval from the delivery service.

use rand::Rng;
use reqwest::StatusCode;
use tracing::debug;
use twitchlink_core::{AuthToken, ChannelIdentity, Error, Result};

use crate::client::error_body;
use crate::TwitchClient;

impl TwitchClient {
    /// Fetch the raw master playlist of a channel.
    ///
    /// A 404 means the channel is not broadcasting and is reported as
    /// [`Error::ChannelOffline`].
    pub async fn fetch_manifest(&self, channel: &ChannelIdentity, token: &AuthToken) -> Result<String> {
        let url = self.manifest_url(channel, token)?;
        let response = self.get(url, None).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Manifest for {} not found", channel.login());
            return Err(Error::ChannelOffline {
                channel: channel.login().to_string(),
            });
        }
        if !status.is_success() {
            return Err(Error::ManifestFetch {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        response.text().await.map_err(Error::transport)
    }

    /// Build the manifest URL. The token is escaped by the query serializer.
    pub(crate) fn manifest_url(&self, channel: &ChannelIdentity, token: &AuthToken) -> Result<url::Url> {
        let config = self.config();
        let mut url = Self::parse_url(&format!(
            "{}/api/channel/hls/{}.m3u8",
            config.usher_url.trim_end_matches('/'),
            channel.login()
        ))?;

        let cache_buster = rand::thread_rng().gen_range(0..10_000_000u32);

        url.query_pairs_mut()
            .append_pair("allow_source", "true")
            .append_pair("allow_audio_only", "true")
            .append_pair("allow_spectre", "false")
            .append_pair("fast_bread", if channel.low_latency() { "true" } else { "false" })
            .append_pair("supported_codecs", &config.supported_codecs)
            .append_pair("player_backend", "mediaplayer")
            .append_pair("playlist_include_framerate", "true")
            .append_pair("p", &cache_buster.to_string())
            .append_pair("sig", &token.signature)
            .append_pair("token", &token.token);

        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_url() {
        let client = TwitchClient::new().unwrap();
        let channel = ChannelIdentity::new("SomeChannel").unwrap().with_low_latency(true);
        let token = AuthToken::new("deadbeef", r#"{"channel":"somechannel","expires":1}"#);

        let url = client.manifest_url(&channel, &token).unwrap();
        assert_eq!(url.host_str(), Some("usher.ttvnw.net"));
        assert_eq!(url.path(), "/api/channel/hls/somechannel.m3u8");

        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["sig"], "deadbeef");
        assert_eq!(pairs["token"], token.token);
        assert_eq!(pairs["fast_bread"], "true");
        assert_eq!(pairs["allow_audio_only"], "true");
        assert!(pairs["p"].parse::<u32>().is_ok());
        // The JSON token must not appear unescaped.
        assert!(!url.as_str().contains('{'));
    }
}
