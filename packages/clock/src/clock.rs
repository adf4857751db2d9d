//! Working and stopped clocks.
use std::cell::RefCell;
use std::marker::PhantomData;
use std::num::IntErrorKind;
use std::time::{Duration, SystemTime};

use api_hub_primitives::DurationSinceUnixEpoch;

/// A clock. `T` selects the time source.
#[derive(Debug)]
pub struct Clock<T> {
    clock: PhantomData<T>,
}

#[derive(Debug)]
pub struct WorkingClock;

#[derive(Debug)]
pub struct StoppedClock;

/// The system clock.
pub type Working = Clock<WorkingClock>;

/// A clock that only moves when told to. Each thread has its own time.
pub type Stopped = Clock<StoppedClock>;

/// Something that can tell the time.
pub trait Time: Sized {
    fn now() -> DurationSinceUnixEpoch;

    fn dbg_clock_type() -> String;
}

impl Time for Working {
    fn now() -> DurationSinceUnixEpoch {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or(DurationSinceUnixEpoch::ZERO)
    }

    fn dbg_clock_type() -> String {
        "Working".to_owned()
    }
}

impl Time for Stopped {
    fn now() -> DurationSinceUnixEpoch {
        FIXED_TIME.with(|time| *time.borrow())
    }

    fn dbg_clock_type() -> String {
        "Stopped".to_owned()
    }
}

/// Controls for the [`Stopped`] clock.
pub trait StoppedTime: Time {
    /// Sets the clock of the current thread.
    fn local_set(unix_time: &DurationSinceUnixEpoch);

    fn local_set_to_unix_epoch() {
        Self::local_set(&DurationSinceUnixEpoch::ZERO);
    }

    /// Moves the clock of the current thread forward.
    ///
    /// # Errors
    ///
    /// Will return `IntErrorKind::PosOverflow` if the new time does not fit
    /// in a `Duration`.
    fn local_add(duration: &Duration) -> Result<(), IntErrorKind>;

    /// Puts the clock of the current thread back to its initial time.
    fn local_reset();
}

impl StoppedTime for Stopped {
    fn local_set(unix_time: &DurationSinceUnixEpoch) {
        FIXED_TIME.with(|time| {
            *time.borrow_mut() = *unix_time;
        });
    }

    fn local_add(duration: &Duration) -> Result<(), IntErrorKind> {
        FIXED_TIME.with(|time| {
            let moved = time.borrow().checked_add(*duration).ok_or(IntErrorKind::PosOverflow)?;
            *time.borrow_mut() = moved;
            Ok(())
        })
    }

    fn local_reset() {
        Self::local_set(&initial_fixed_time());
    }
}

thread_local!(static FIXED_TIME: RefCell<DurationSinceUnixEpoch> = RefCell::new(initial_fixed_time()));

#[cfg(not(test))]
fn initial_fixed_time() -> DurationSinceUnixEpoch {
    (*crate::static_time::TIME_AT_APP_START)
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(DurationSinceUnixEpoch::ZERO)
}

#[cfg(test)]
fn initial_fixed_time() -> DurationSinceUnixEpoch {
    DurationSinceUnixEpoch::ZERO
}
