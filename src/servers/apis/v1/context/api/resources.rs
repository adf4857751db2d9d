//! API resources for the [`api`](crate::servers::apis::v1::context::api) API context.
use api_hub_clock::conv::convert_from_timestamp_to_iso_8601;
use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiEntity};

/// A listed API with its usage.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    pub id: String,
    pub name: String,
    pub playground_enabled: bool,
    pub stats: Stats,
    pub playground_stats: PlaygroundStats,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Stats {
    pub calls: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundStats {
    pub total_requests: u64,
    pub total_errors: u64,
    /// Milliseconds.
    pub avg_response_time: u64,
    /// ISO 8601 timestamp, `null` if the playground was never used.
    pub last_used: Option<String>,
}

impl From<ApiEntity> for Api {
    fn from(api: ApiEntity) -> Self {
        Api {
            id: api.id.to_string(),
            name: api.name,
            playground_enabled: api.playground_enabled,
            stats: api.stats.into(),
            playground_stats: api.playground_stats.into(),
        }
    }
}

impl From<api::Stats> for Stats {
    fn from(stats: api::Stats) -> Self {
        Stats { calls: stats.calls }
    }
}

impl From<api::PlaygroundStats> for PlaygroundStats {
    fn from(stats: api::PlaygroundStats) -> Self {
        PlaygroundStats {
            total_requests: stats.total_requests,
            total_errors: stats.total_errors,
            avg_response_time: stats.avg_response_time,
            last_used: stats.last_used.map(convert_from_timestamp_to_iso_8601),
        }
    }
}
