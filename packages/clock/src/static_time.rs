//! The time at which the application started.
use std::time::SystemTime;

lazy_static! {
    /// Initialized by the bootstrap process; the stopped clock starts here
    /// outside of this crate's own tests.
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
