//! Channel identity types.

use serde::Serialize;

use crate::{Error, Result};

/// The channel a resolver is bound to.
///
/// Built once and never mutated afterwards. The login is case-insensitive
/// upstream and is stored lower-cased.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ChannelIdentity {
    login: String,
    #[serde(skip_serializing)]
    auth: Option<String>,
    low_latency: bool,
}

impl ChannelIdentity {
    /// Create an identity for a channel login.
    pub fn new(channel: impl AsRef<str>) -> Result<Self> {
        let login = channel.as_ref().trim().to_lowercase();
        if login.is_empty() {
            return Err(Error::InvalidArgument("channel must be set".to_string()));
        }

        Ok(Self {
            login,
            auth: None,
            low_latency: false,
        })
    }

    /// Attach a bearer credential sent with authorization requests.
    pub fn with_auth(mut self, credential: impl Into<String>) -> Self {
        let credential = credential.into();
        self.auth = (!credential.is_empty()).then_some(credential);
        self
    }

    /// Request the low-latency playlist variant.
    pub const fn with_low_latency(mut self, low_latency: bool) -> Self {
        self.low_latency = low_latency;
        self
    }

    /// Lower-cased channel login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Bearer credential, if any.
    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    pub const fn low_latency(&self) -> bool {
        self.low_latency
    }
}

// The credential is a secret and never shows up in logs.
impl std::fmt::Debug for ChannelIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelIdentity")
            .field("login", &self.login)
            .field("auth", &self.auth.as_ref().map(|_| "<redacted>"))
            .field("low_latency", &self.low_latency)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_lowercased() {
        let channel = ChannelIdentity::new("SomeChannel").unwrap();
        assert_eq!(channel.login(), "somechannel");
        assert!(channel.auth().is_none());
        assert!(!channel.low_latency());
    }

    #[test]
    fn test_channel_rejects_empty() {
        assert!(matches!(
            ChannelIdentity::new("  "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_channel_options() {
        let channel = ChannelIdentity::new("somechannel")
            .unwrap()
            .with_auth("secret")
            .with_low_latency(true);
        assert_eq!(channel.auth(), Some("secret"));
        assert!(channel.low_latency());
        assert!(!format!("{channel:?}").contains("secret"));
    }
}
