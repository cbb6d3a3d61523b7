//! Quality-aware stream resolution for one channel.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use twitchlink_core::{AuthToken, ChannelIdentity, Error, QualityLabel, Result, StreamMeta};
use twitchlink_playlist::{parse_playlist, ParsedManifest};

use crate::provider::{GqlTokenProvider, TokenProvider};
use crate::TwitchClient;

/// Resolves a live channel into rendition URLs.
///
/// Each call runs its own token exchange, manifest fetch and parse. No
/// token or manifest is kept between calls, so concurrent calls share
/// nothing but the HTTP connection pool.
///
/// ```no_run
/// # async fn demo() -> twitchlink_core::Result<()> {
/// use twitchlink_client::{ChannelIdentity, TwitchStream};
///
/// let stream = TwitchStream::new(ChannelIdentity::new("somechannel")?)?;
/// if stream.is_live().await? {
///     let url = stream.resolve_stream_url(&["720p60", "source"]).await?;
///     println!("{url}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TwitchStream {
    client: TwitchClient,
    channel: ChannelIdentity,
    tokens: Arc<dyn TokenProvider>,
}

impl TwitchStream {
    /// Create a resolver using the web player configuration.
    pub fn new(channel: ChannelIdentity) -> Result<Self> {
        Ok(Self::with_client(TwitchClient::new()?, channel))
    }

    /// Create a resolver on top of an existing client.
    pub fn with_client(client: TwitchClient, channel: ChannelIdentity) -> Self {
        Self {
            client,
            channel,
            tokens: Arc::new(GqlTokenProvider),
        }
    }

    /// Use a different token exchange protocol.
    #[must_use]
    pub fn with_token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.tokens = Arc::new(provider);
        self
    }

    pub const fn channel(&self) -> &ChannelIdentity {
        &self.channel
    }

    /// URL of the first candidate quality the channel currently offers.
    ///
    /// Candidates are tried in the given order, not in playlist order.
    #[instrument(skip_all, fields(channel = %self.channel.login()))]
    pub async fn resolve_stream_url<S: AsRef<str>>(&self, candidates: &[S]) -> Result<String> {
        let manifest = self.manifest().await?;

        match manifest.select(candidates) {
            Some((quality, variant)) => {
                info!("Resolved {quality} for {}", self.channel.login());
                Ok(variant.url.clone())
            }
            None => Err(Error::QualityNotFound {
                requested: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
            }),
        }
    }

    /// Quality labels in playlist order, aliases included.
    #[instrument(skip_all, fields(channel = %self.channel.login()))]
    pub async fn list_qualities(&self) -> Result<Vec<QualityLabel>> {
        Ok(self.manifest().await?.stream_qualities)
    }

    /// Whether the channel is broadcasting. The playlist is fetched but not parsed.
    #[instrument(skip_all, fields(channel = %self.channel.login()))]
    pub async fn is_live(&self) -> Result<bool> {
        match self.fetch_manifest().await {
            Ok(_) => Ok(true),
            Err(e) if e.is_offline() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Current title and game.
    ///
    /// Never fails: any error yields the placeholder metadata.
    #[instrument(skip_all, fields(channel = %self.channel.login()))]
    pub async fn stream_meta(&self) -> StreamMeta {
        match self.client.stream_metadata(&self.channel).await {
            Ok(meta) => meta,
            Err(e) => {
                warn!("Metadata lookup for {} failed: {e}", self.channel.login());
                StreamMeta::unknown()
            }
        }
    }

    /// Run the whole pipeline and return the parsed playlist.
    pub async fn manifest(&self) -> Result<ParsedManifest> {
        let text = self.fetch_manifest().await?;
        Ok(parse_playlist(&text))
    }

    async fn authorize(&self) -> Result<AuthToken> {
        debug!(
            "Requesting access token for {} via {}",
            self.channel.login(),
            self.tokens.name()
        );
        self.tokens.access_token(&self.client, &self.channel).await
    }

    async fn fetch_manifest(&self) -> Result<String> {
        let token = self.authorize().await?;
        self.client.fetch_manifest(&self.channel, &token).await
    }
}

impl std::fmt::Debug for TwitchStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchStream")
            .field("channel", &self.channel)
            .field("tokens", &self.tokens.name())
            .finish_non_exhaustive()
    }
}
