//! Listed APIs.
//!
//! An [`ApiEntity`] is a public API listed in the hub. The playground only
//! cares about its id, its owner toggle and its usage counters.
use std::str::FromStr;

use api_hub_primitives::DurationSinceUnixEpoch;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of an API id.
pub const MAX_API_ID_LENGTH: usize = 128;

/// Opaque unique id of a listed API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct ApiId(String);

impl ApiId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseApiIdError {
    #[error("api id is empty")]
    Empty,
    #[error("api id is longer than {MAX_API_ID_LENGTH} bytes: {0}")]
    TooLong(usize),
    #[error("api id contains control characters: {0:?}")]
    ControlCharacters(String),
}

impl FromStr for ApiId {
    type Err = ParseApiIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();

        if id.is_empty() {
            return Err(ParseApiIdError::Empty);
        }

        if id.len() > MAX_API_ID_LENGTH {
            return Err(ParseApiIdError::TooLong(id.len()));
        }

        if id.chars().any(char::is_control) {
            return Err(ParseApiIdError::ControlCharacters(id.to_owned()));
        }

        Ok(Self(id.to_owned()))
    }
}

/// Legacy aggregate counters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub calls: u64,
}

/// Usage of the playground for one API. Counters are lifetime, there is no
/// reset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaygroundStats {
    pub total_requests: u64,
    pub total_errors: u64,
    /// Running mean latency in milliseconds.
    pub avg_response_time: u64,
    pub last_used: Option<DurationSinceUnixEpoch>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiEntity {
    pub id: ApiId,
    pub name: String,
    /// Owner toggle for the playground.
    pub playground_enabled: bool,
    pub stats: Stats,
    pub playground_stats: PlaygroundStats,
}

impl ApiEntity {
    /// A newly listed API: playground enabled and zeroed telemetry.
    #[must_use]
    pub fn new(id: ApiId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            playground_enabled: true,
            stats: Stats::default(),
            playground_stats: PlaygroundStats::default(),
        }
    }
}
