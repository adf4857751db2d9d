//! Time related functions and types.
//!
//! The playground stamps every recorded proxy call with a `last_used`
//! timestamp. Production code reads the system time through the
//! [`Working`](crate::clock::Working) clock. Tests use the
//! [`Stopped`](crate::clock::Stopped) clock, a thread-local fixed time that
//! can be moved forward or backward, so the timestamps they assert on are
//! deterministic.
//!
//! Crates depending on this one declare their own `CurrentClock` alias:
//!
//! ```rust,ignore
//! #[cfg(not(test))]
//! pub(crate) type CurrentClock = api_hub_clock::clock::Working;
//!
//! #[cfg(test)]
//! pub(crate) type CurrentClock = api_hub_clock::clock::Stopped;
//! ```
pub mod clock;
pub mod conv;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
