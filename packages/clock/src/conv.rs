//! Conversions between timestamps and their textual representation.
use api_hub_primitives::DurationSinceUnixEpoch;
use chrono::{DateTime, SecondsFormat, Utc};

/// It converts a timestamp into a `DateTime::<Utc>`.
///
/// Returns `None` if the timestamp is out of the range `chrono` supports.
#[must_use]
pub fn convert_from_timestamp_to_datetime_utc(duration: DurationSinceUnixEpoch) -> Option<DateTime<Utc>> {
    let seconds = i64::try_from(duration.as_secs()).ok()?;

    DateTime::from_timestamp(seconds, duration.subsec_nanos())
}

/// It converts a timestamp into an ISO 8601 string with millisecond
/// precision, for example `1970-01-01T00:01:00.000Z`.
///
/// Out of range timestamps are rendered as the Unix Epoch.
#[must_use]
pub fn convert_from_timestamp_to_iso_8601(duration: DurationSinceUnixEpoch) -> String {
    convert_from_timestamp_to_datetime_utc(duration)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
