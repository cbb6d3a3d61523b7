//! # twitchlink-core
//!
//! Core types and error handling shared by the twitchlink crates.

pub mod error;
pub mod types;

pub use error::{Error, HttpError, Result};
pub use types::*;
