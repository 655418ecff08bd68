//! Time source abstraction
//!
//! Record ids and deadline math both derive from "now". Routing them through a
//! trait keeps production on the system clock while tests inject a
//! deterministic one.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in UTC, used for deadline day counts.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generate a pseudo-unique record id from the clock.
///
/// Ids are time-derived and never stored; two calls in the same millisecond
/// collide, which is acceptable because nothing ever looks a record up again.
pub fn record_id(clock: &dyn Clock, prefix: &str) -> String {
    format!("{}-{}", prefix, clock.now().timestamp_millis())
}
