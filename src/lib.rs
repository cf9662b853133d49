//! Academic calendar engine built on a synthetic 13-month × 28-day year.
//!
//! The engine computes academic years, semesters, holidays and seasonal
//! windows in the unconventional calendar and maps them onto standard
//! (Gregorian) dates for storage and display.

mod clock;
mod config;
mod consts;
mod error;
mod events;
mod generator;
mod prelude;
mod range;
mod store;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalendarConfig, FixedHoliday, SeasonalAdjustment, SemesterStructure};
pub use consts::*;
pub use error::{CalendarError, StoreError, ValidationError};
pub use events::{CalendarEvent, EventKind, calendar_events};
pub use generator::{AcademicYearGenerator, SemesterPlan, plan_semesters};
pub use range::{DateSpan, SpanError};
pub use store::{
    AcademicYear, AcademicYearId, AcademicYearStore, MemoryStore, NewAcademicYear, NewSemester,
    Semester, SemesterId,
};
pub use types::{Day, Month};

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic year label for the year that starts in `start_year`, e.g. `"2025-2026"`.
pub fn academic_year_label(start_year: i32) -> String {
    format!("{start_year}{LABEL_SEPARATOR}{}", start_year.saturating_add(1))
}

/// A date in the unconventional calendar.
///
/// Month and day are always in range: the constructor clamps rather than
/// rejects. Dates order chronologically (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnconventionalDate {
    year:  i32,
    month: Month,
    day:   Day,
}

impl UnconventionalDate {
    /// Creates a date, clamping `month` into `1..=13` and `day` into `1..=28`.
    pub fn new(year: i32, month: i64, day: i64) -> Self {
        Self {
            year,
            month: Month::clamped(month),
            day: Day::clamped(day),
        }
    }

    /// Creates a date from already validated components
    pub const fn from_parts(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1..=13)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (1..=28)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Display name of this date's month
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month.get() - 1)]
    }

    /// Moves the date `days` days forward, rolling days into months and
    /// months into years.
    #[must_use]
    pub fn add_days(self, days: u32) -> Self {
        self.roll_forward(u64::from(days))
    }

    /// Signed variant of [`add_days`](Self::add_days).
    ///
    /// # Errors
    /// Returns `ValidationError::NegativeDelta` if `days` is negative;
    /// moving backwards is not supported.
    pub fn try_add_days(self, days: i64) -> Result<Self, ValidationError> {
        let forward = u64::try_from(days).map_err(|_| ValidationError::NegativeDelta(days))?;
        Ok(self.roll_forward(forward))
    }

    fn roll_forward(self, days: u64) -> Self {
        let per_month = u64::from(DAYS_PER_MONTH);
        let per_year = u64::from(MONTHS_PER_YEAR);

        let day_offset = u64::from(self.day.get() - MIN_DAY) + days;
        let month_offset = u64::from(self.month.get() - FIRST_MONTH) + day_offset / per_month;
        let years = i32::try_from(month_offset / per_year).unwrap_or(i32::MAX);

        // Both remainders are below 28 and 13 respectively, so they fit.
        let day = i64::try_from(day_offset % per_month).unwrap_or(0) + i64::from(MIN_DAY);
        let month = i64::try_from(month_offset % per_year).unwrap_or(0) + i64::from(FIRST_MONTH);

        Self::new(self.year.saturating_add(years), month, day)
    }

    /// `"{day} {MonthName} {year}"`, e.g. `"1 Octavus 2025"`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Label of the academic year this date falls in, given the configured
    /// academic year anchor month.
    pub fn academic_year_string(&self, config: &CalendarConfig) -> String {
        if self.month.get() >= config.academic_year_start_month {
            academic_year_label(self.year)
        } else {
            academic_year_label(self.year.saturating_sub(1))
        }
    }

    /// Approximate standard calendar date for this value.
    ///
    /// The mapping is proportional, not calendrical: the 13 months are spread
    /// over 12 standard months and the 28 days over a nominal 30-day month.
    /// A standard day that does not exist in its month (29 February in a
    /// common year) rolls over into the next month. Returns `None` if the
    /// year is outside the range chrono can represent.
    pub fn to_standard_date(&self) -> Option<NaiveDate> {
        let month_index = u32::from(self.month.get() - FIRST_MONTH) * STANDARD_MONTHS_PER_YEAR
            / u32::from(MONTHS_PER_YEAR);
        let day_offset =
            u32::from(self.day.get() - MIN_DAY) * STANDARD_NOMINAL_MONTH_DAYS / u32::from(DAYS_PER_MONTH);

        NaiveDate::from_ymd_opt(self.year, month_index + 1, 1)?
            .checked_add_days(Days::new(u64::from(day_offset)))
    }

    /// Approximate unconventional date for a standard calendar date.
    ///
    /// This is the proportional inverse of [`to_standard_date`](Self::to_standard_date),
    /// and like it is lossy: converting there and back does not always give
    /// the starting value.
    pub fn from_standard_date(date: NaiveDate) -> Self {
        let month = date.month0() * u32::from(MONTHS_PER_YEAR) / STANDARD_MONTHS_PER_YEAR + 1;
        let day = date.day() * u32::from(DAYS_PER_MONTH) / STANDARD_NOMINAL_MONTH_DAYS + 1;
        Self::new(date.year(), i64::from(month), i64::from(day))
    }
}

impl fmt::Display for UnconventionalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

impl From<NaiveDate> for UnconventionalDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_standard_date(date)
    }
}
