use crate::prelude::*;
use crate::{DAYS_PER_MONTH, MAX_GENERATION_COUNT, MIN_YEAR, MONTHS_PER_YEAR};

/// Rejected input: a precondition the caller was expected to uphold.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", DAYS_PER_MONTH)]
    InvalidDay(u8),
    #[display(fmt = "Cannot add a negative number of days: {_0}")]
    NegativeDelta(i64),
    #[display(fmt = "Invalid year count: {} (must be 1-{})", "_0", MAX_GENERATION_COUNT)]
    InvalidCount(u32),
    #[display(
        fmt = "Invalid start year {start_year} for {count} years (range is {}-{last_start})",
        MIN_YEAR
    )]
    InvalidStartYear {
        start_year: i32,
        count: u32,
        /// Latest start year that keeps the whole batch within `MAX_YEAR`
        last_start: i32,
    },
    #[display(fmt = "Year {_0} has no standard calendar equivalent")]
    UnrepresentableYear(i32),
    #[display(fmt = "Invalid calendar configuration: {_0}")]
    InvalidConfig(String),
}

impl std::error::Error for ValidationError {}

/// Failure reported by an [`AcademicYearStore`](crate::AcademicYearStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A row with this label already exists (unique constraint hit).
    #[error("Academic year {label} already exists")]
    Conflict { label: String },

    /// Transport or storage failure.
    #[error("Store failure: {0}")]
    Backend(String),
}

/// Error type for calendar engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The academic year was still missing after a generation attempt.
    #[error("Academic year {label} not found")]
    NotFound { label: String },

    #[error(transparent)]
    Persistence(#[from] StoreError),
}
