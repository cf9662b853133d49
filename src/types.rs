use crate::ValidationError;
use crate::consts::{DAYS_PER_MONTH, FIRST_MONTH, MIN_DAY, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Narrows `value` into `min..=max` and returns it as a `NonZeroU8`.
/// `min` must be at least 1.
fn clamp_nonzero(value: i64, min: u8, max: u8) -> NonZeroU8 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    u8::try_from(clamped)
        .ok()
        .and_then(NonZeroU8::new)
        .unwrap_or(NonZeroU8::MIN)
}

/// A month value guaranteed to be in the range `1..=MONTHS_PER_YEAR` (1..=13)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MONTHS_PER_YEAR`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidMonth` if the value is 0 or > `MONTHS_PER_YEAR`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidMonth(value))?;
        if value > MONTHS_PER_YEAR {
            return Err(ValidationError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month, pulling out-of-range input to the nearest bound
    pub fn clamped(value: i64) -> Self {
        Self(clamp_nonzero(value, FIRST_MONTH, MONTHS_PER_YEAR))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be in the range `1..=DAYS_PER_MONTH` (1..=28)
/// Every unconventional month has the same length, so no year/month context is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `DAYS_PER_MONTH`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDay` if the value is 0 or > `DAYS_PER_MONTH`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidDay(value))?;
        if value > DAYS_PER_MONTH {
            return Err(ValidationError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Day, pulling out-of-range input to the nearest bound
    pub fn clamped(value: i64) -> Self {
        Self(clamp_nonzero(value, MIN_DAY, DAYS_PER_MONTH))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
