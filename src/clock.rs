use chrono::{Datelike, Local};

/// Source of the real-world (standard calendar) year.
///
/// The generator asks the clock which academic year is "current", so hosts
/// and tests can pin it instead of depending on the system time.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
