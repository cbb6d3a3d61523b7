//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public client identifier of the Twitch web player.
pub const WEB_CLIENT_ID: &str = "kimne78kx3ncx6brgo4mv6wki5h1ko";

const GQL_URL: &str = "https://gql.twitch.tv/gql";
const USHER_URL: &str = "https://usher.ttvnw.net";
const LEGACY_API_URL: &str = "https://api.twitch.tv";

const WEB_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by every request a [`crate::TwitchClient`] makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Value of the `Client-ID` header sent on every request.
    pub client_id: String,
    /// GraphQL endpoint used for token exchange and metadata.
    pub gql_url: String,
    /// Base URL of the manifest delivery service.
    pub usher_url: String,
    /// Base URL of the legacy keyed access-token API.
    pub legacy_api_url: String,
    /// User agent string.
    pub user_agent: String,
    /// Player type reported when requesting an access token (e.g. "site").
    pub player_type: String,
    /// Platform reported when requesting an access token (e.g. "web").
    pub platform: String,
    /// Codecs advertised to the manifest endpoint.
    pub supported_codecs: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration of the Twitch web player.
    pub fn web() -> Self {
        Self {
            client_id: WEB_CLIENT_ID.to_string(),
            gql_url: GQL_URL.to_string(),
            usher_url: USHER_URL.to_string(),
            legacy_api_url: LEGACY_API_URL.to_string(),
            user_agent: WEB_USER_AGENT.to_string(),
            player_type: "site".to_string(),
            platform: "web".to_string(),
            supported_codecs: "avc1".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the GraphQL endpoint elsewhere.
    pub fn with_gql_url(mut self, url: impl Into<String>) -> Self {
        self.gql_url = url.into();
        self
    }

    /// Point the manifest endpoint elsewhere.
    pub fn with_usher_url(mut self, url: impl Into<String>) -> Self {
        self.usher_url = url.into();
        self
    }

    pub fn with_legacy_api_url(mut self, url: impl Into<String>) -> Self {
        self.legacy_api_url = url.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_player_type(mut self, player_type: impl Into<String>) -> Self {
        self.player_type = player_type.into();
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::web()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_web_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.client_id, WEB_CLIENT_ID);
        assert_eq!(config.gql_url, "https://gql.twitch.tv/gql");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"usher_url": "http://localhost:8080"}"#).unwrap();
        assert_eq!(config.usher_url, "http://localhost:8080");
        assert_eq!(config.platform, "web");
    }
}
