//! Twitch GraphQL request and response types.

use serde::{Deserialize, Serialize};

/// Request body for the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlRequest<V> {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: V,
}

impl<V> GqlRequest<V> {
    pub const fn new(operation_name: &'static str, query: &'static str, variables: V) -> Self {
        Self {
            operation_name,
            query,
            variables,
        }
    }
}

/// Response envelope of the GraphQL endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Option<Vec<GqlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GqlError {
    pub message: String,
}

impl<D> GqlResponse<D> {
    /// Take the payload, turning reported GraphQL errors into an API error.
    pub fn into_data(self) -> twitchlink_core::Result<D> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(twitchlink_core::Error::Api(messages));
        }

        self.data
            .ok_or_else(|| twitchlink_core::Error::Parse("GraphQL response has no data".to_string()))
    }
}

pub const PLAYBACK_ACCESS_TOKEN_OPERATION: &str = "PlaybackAccessToken";

pub const PLAYBACK_ACCESS_TOKEN_QUERY: &str = "query PlaybackAccessToken($login: String!, $platform: String!, $playerType: String!) { streamPlaybackAccessToken(channelName: $login, params: {platform: $platform, playerBackend: \"mediaplayer\", playerType: $playerType}) { value signature } }";

/// Variables of the playback access token query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackAccessTokenVariables {
    pub login: String,
    pub platform: String,
    pub player_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackAccessTokenData {
    pub stream_playback_access_token: Option<PlaybackAccessToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackAccessToken {
    pub value: String,
    pub signature: String,
}

/// Body of the legacy keyed access-token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyAccessToken {
    pub sig: String,
    pub token: String,
}

pub const STREAM_METADATA_OPERATION: &str = "StreamMetadata";

pub const STREAM_METADATA_QUERY: &str =
    "query StreamMetadata($login: String!) { user(login: $login) { stream { title game { name } } } }";

#[derive(Debug, Clone, Serialize)]
pub struct StreamMetadataVariables {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamMetadataData {
    pub user: Option<MetadataUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataUser {
    pub stream: Option<MetadataStream>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataStream {
    pub title: Option<String>,
    pub game: Option<MetadataGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataGame {
    pub name: Option<String>,
}
