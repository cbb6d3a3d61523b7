//! HTTP client for the Twitch endpoints.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use twitchlink_core::{Error, HttpError, Result};

use crate::config::ClientConfig;
use crate::types::{GqlRequest, GqlResponse};

/// Thin wrapper around [`reqwest::Client`] carrying the Twitch identification
/// headers and endpoint configuration.
///
/// Requests are never retried; transport failures reach the caller as-is.
#[derive(Clone)]
pub struct TwitchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TwitchClient {
    /// Create a client with the web player configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::web())
    }

    /// Create a client with a specific configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert("client-id", header_value(&config.client_id)?);
        headers.insert(USER_AGENT, header_value(&config.user_agent)?);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(Error::transport)?;

        Ok(Self { http, config })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST a GraphQL query. The bearer credential, when given, is sent as an
    /// `OAuth` authorization header.
    ///
    /// The raw response is returned so callers can map the status themselves.
    pub(crate) async fn post_gql<V: Serialize>(
        &self,
        request: &GqlRequest<V>,
        credential: Option<&str>,
    ) -> Result<reqwest::Response> {
        debug!("GraphQL {} -> {}", request.operation_name, self.config.gql_url);

        let mut builder = self.http.post(&self.config.gql_url).json(request);
        if let Some(credential) = credential {
            builder = builder.header(AUTHORIZATION, header_value(&format!("OAuth {credential}"))?);
        }

        self.send(builder).await
    }

    /// GET a URL.
    pub(crate) async fn get(
        &self,
        url: url::Url,
        credential: Option<&str>,
    ) -> Result<reqwest::Response> {
        debug!("GET {}{}", url.origin().ascii_serialization(), url.path());

        let mut builder = self.http.get(url);
        if let Some(credential) = credential {
            builder = builder.header(AUTHORIZATION, header_value(&format!("OAuth {credential}"))?);
        }

        self.send(builder).await
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else {
                Error::transport(e)
            }
        })
    }

    /// Parse a URL from configuration.
    pub(crate) fn parse_url(raw: &str) -> Result<url::Url> {
        url::Url::parse(raw).map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{raw}: {e}"))))
    }
}

/// Read a successful GraphQL response body.
pub(crate) async fn read_gql<D: DeserializeOwned>(response: reqwest::Response) -> Result<D> {
    let bytes = response.bytes().await.map_err(Error::transport)?;
    let envelope: GqlResponse<D> = serde_json::from_slice(&bytes)
        .map_err(|e| Error::Parse(format!("Failed to parse GraphQL response: {e}")))?;
    envelope.into_data()
}

/// Read the body of a failed response for error reporting.
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_default()
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::InvalidArgument(format!("Invalid header value: {e}")))
}

impl std::fmt::Debug for TwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
