//! Playback access token.

use serde::{Deserialize, Serialize};

/// Signed playback access token exchanged for a channel's manifest.
///
/// Tokens are short-lived and are never cached between resolutions.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub signature: String,
    pub token: String,
}

impl AuthToken {
    pub fn new(signature: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("signature", &self.signature)
            .field("token", &"<redacted>")
            .finish()
    }
}
