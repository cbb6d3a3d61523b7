//! Live stream metadata query.

use twitchlink_core::{ChannelIdentity, Error, Result, StreamMeta};

use crate::client::{error_body, read_gql};
use crate::types::{
    GqlRequest, StreamMetadataData, StreamMetadataVariables, STREAM_METADATA_OPERATION,
    STREAM_METADATA_QUERY,
};
use crate::TwitchClient;

impl TwitchClient {
    /// Query the current title and game of a channel.
    ///
    /// Fields the upstream leaves null (e.g. while offline) come back as
    /// placeholders.
    pub async fn stream_metadata(&self, channel: &ChannelIdentity) -> Result<StreamMeta> {
        let request = GqlRequest::new(
            STREAM_METADATA_OPERATION,
            STREAM_METADATA_QUERY,
            StreamMetadataVariables {
                login: channel.login().to_string(),
            },
        );

        let response = self.post_gql(&request, channel.auth()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(twitchlink_core::HttpError::StatusError {
                status: status.as_u16(),
                message: error_body(response).await,
            }));
        }

        let data: StreamMetadataData = read_gql(response).await?;
        let stream = data.user.and_then(|user| user.stream);

        let (title, game) = match stream {
            Some(stream) => (stream.title, stream.game.and_then(|game| game.name)),
            None => (None, None),
        };

        Ok(StreamMeta::new(title, game))
    }
}
