//! Wall-clock sources for note identifiers.

use chrono::{Local, NaiveDateTime};

/// Supplies the local date/time used to stamp note identifiers.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local calendar and time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
