//! Playground usage telemetry.
//!
//! After every forwarding attempt for a resolved API the counters of the API
//! are updated in one database write:
//!
//! - `stats.calls` and `playground_stats.total_requests` are incremented.
//! - `playground_stats.total_errors` is incremented when the transport failed
//!   or the origin answered with a status `>= 400`.
//! - `playground_stats.avg_response_time` is set to the new running mean.
//! - `playground_stats.last_used` is set to the current time.
//!
//! The increments are applied in place by the database. The running mean is
//! computed from the values read by the access gate, so concurrent requests
//! for the same API may overwrite each other's average (last write wins).
//!
//! Telemetry is best effort: a failed write is logged and does not change the
//! response sent to the client.
use std::sync::Arc;

use api_hub_clock::clock::Time;
use api_hub_primitives::DurationSinceUnixEpoch;
use tracing::{debug, error};

use super::api::{ApiEntity, PlaygroundStats};
use super::databases::Database;
use crate::CurrentClock;

/// The values written for one recorded playground request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaygroundUsage {
    pub is_error: bool,
    pub avg_response_time: u64,
    pub last_used: DurationSinceUnixEpoch,
}

impl PlaygroundUsage {
    #[must_use]
    pub fn new(current: &PlaygroundStats, elapsed_ms: u64, is_error: bool, now: DurationSinceUnixEpoch) -> Self {
        Self {
            is_error,
            avg_response_time: running_average(current.avg_response_time, current.total_requests, elapsed_ms),
            last_used: now,
        }
    }
}

/// The mean after adding one latency to `count` latencies whose mean is
/// `avg`, rounded half up.
#[must_use]
pub fn running_average(avg: u64, count: u64, latency: u64) -> u64 {
    let total = u128::from(avg) * u128::from(count) + u128::from(latency);
    let new_count = u128::from(count) + 1;

    let rounded = (2 * total + new_count) / (2 * new_count);

    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// It records one forwarding attempt for the API. Failures are logged and
/// swallowed.
pub fn record(database: &Arc<Box<dyn Database>>, api: &ApiEntity, elapsed_ms: u64, is_error: bool) {
    let usage = PlaygroundUsage::new(&api.playground_stats, elapsed_ms, is_error, CurrentClock::now());

    match database.record_playground_usage(&api.id, &usage) {
        Ok(0) => {
            error!(api_id = %api.id, "playground usage not recorded, the api no longer exists");
        }
        Ok(_) => {
            debug!(api_id = %api.id, elapsed_ms, is_error, avg = usage.avg_response_time, "playground usage recorded");
        }
        Err(err) => {
            error!(api_id = %api.id, %err, "failed to record playground usage");
        }
    }
}
