use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_MONTH, DAYS_PER_YEAR, UnconventionalDate, prelude::*};

/// An inclusive span between two unconventional dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start} to {end}")]
#[serde(try_from = "RawSpan")]
pub struct DateSpan {
    start: UnconventionalDate,
    end:   UnconventionalDate,
}

/// Error type for date span operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start date is after end date.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    InvalidSpan {
        start: UnconventionalDate,
        end:   UnconventionalDate,
    },
}

#[derive(Deserialize)]
struct RawSpan {
    start: UnconventionalDate,
    end:   UnconventionalDate,
}

impl TryFrom<RawSpan> for DateSpan {
    type Error = SpanError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Days since 1 Primus of year 0; every year has the same length.
fn day_number(date: UnconventionalDate) -> i64 {
    i64::from(date.year()) * i64::from(DAYS_PER_YEAR)
        + i64::from(date.month() - 1) * i64::from(DAYS_PER_MONTH)
        + i64::from(date.day() - 1)
}

impl DateSpan {
    /// Creates a new date span with validation.
    ///
    /// # Errors
    /// Returns `SpanError::InvalidSpan` if start > end.
    pub fn new(start: UnconventionalDate, end: UnconventionalDate) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Span of `days` days beginning on `start`; zero is treated as one day.
    pub fn starting_at(start: UnconventionalDate, days: u32) -> Self {
        Self {
            start,
            end: start.add_days(days.max(1) - 1),
        }
    }

    /// Returns the first day of the span
    pub const fn start(&self) -> UnconventionalDate {
        self.start
    }

    /// Returns the last day of the span (inclusive)
    pub const fn end(&self) -> UnconventionalDate {
        self.end
    }

    /// Number of days covered, counting both ends
    pub fn len_days(&self) -> i64 {
        day_number(self.end) - day_number(self.start) + 1
    }

    /// Checks if the span contains a given date
    pub fn contains(&self, date: &UnconventionalDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this span shares at least one day with another span
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Days strictly between the end of this span and the start of `other`.
    /// Returns `None` if `other` does not start after this span ends.
    pub fn gap_before(&self, other: &Self) -> Option<i64> {
        let gap = day_number(other.start) - day_number(self.end) - 1;
        (gap >= 0).then_some(gap)
    }
}

impl PartialOrd for DateSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}
