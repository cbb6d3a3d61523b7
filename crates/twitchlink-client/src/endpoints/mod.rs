//! Twitch endpoint implementations.

pub mod access_token;
pub mod metadata;
pub mod usher;
