//! Clock
//!
//! Source of completion timestamps. Injected into the store so tests can pin
//! the time.

use chrono::Local;

/// Default rendering, matching the `es-ES` locale string of a browser date
/// (day, month and hour are not zero-padded)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-d/%-m/%Y, %-H:%M:%S";

/// Produces the formatted "now" stamped on completed items
pub trait Clock {
    fn now(&self) -> String;
}

/// Local wall-clock time rendered with a chrono format string
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::with_format(DEFAULT_TIMESTAMP_FORMAT)
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        Self { format: format.into() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

/// Always returns the same timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> String {
        (**self).now()
    }
}
