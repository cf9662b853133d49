//! Persistence port for generated schedule records, plus an in-memory adapter.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{StoreError, prelude::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AcademicYearId(i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SemesterId(i64);

/// A persisted academic year. Dates are standard calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYear {
    pub id: AcademicYearId,
    /// `"YYYY-YYYY+1"`, unique across the store
    pub year_label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub is_current: bool,
}

/// Data for a new academic year row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAcademicYear {
    pub year_label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub is_current: bool,
}

/// A persisted semester belonging to one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: SemesterId,
    pub academic_year_id: AcademicYearId,
    pub name: String,
    /// 1-based position within the academic year
    pub order: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Data for a new semester row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSemester {
    pub academic_year_id: AcademicYearId,
    pub name: String,
    pub order: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Storage operations the calendar engine needs, and nothing more.
///
/// Implementations must enforce label uniqueness in `create_academic_year`
/// and report a duplicate as [`StoreError::Conflict`]; the generator relies
/// on that to stay correct when two callers generate the same year at once.
#[async_trait]
pub trait AcademicYearStore: Send + Sync {
    async fn find_academic_year_by_label(
        &self,
        label: &str,
    ) -> Result<Option<AcademicYear>, StoreError>;

    async fn create_academic_year(&self, data: NewAcademicYear) -> Result<AcademicYear, StoreError>;

    async fn create_semester(&self, data: NewSemester) -> Result<Semester, StoreError>;
}

#[async_trait]
impl<T: AcademicYearStore + ?Sized> AcademicYearStore for Arc<T> {
    async fn find_academic_year_by_label(
        &self,
        label: &str,
    ) -> Result<Option<AcademicYear>, StoreError> {
        (**self).find_academic_year_by_label(label).await
    }

    async fn create_academic_year(&self, data: NewAcademicYear) -> Result<AcademicYear, StoreError> {
        (**self).create_academic_year(data).await
    }

    async fn create_semester(&self, data: NewSemester) -> Result<Semester, StoreError> {
        (**self).create_semester(data).await
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    years: Vec<AcademicYear>,
    semesters: Vec<Semester>,
    next_id: i64,
}

impl MemoryState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process store with a unique index on the year label.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every academic year, in creation order
    pub fn academic_years(&self) -> Vec<AcademicYear> {
        self.state().years.clone()
    }

    /// Snapshot of the semesters of one academic year, in creation order
    pub fn semesters_for(&self, academic_year_id: AcademicYearId) -> Vec<Semester> {
        self.state()
            .semesters
            .iter()
            .filter(|s| s.academic_year_id == academic_year_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AcademicYearStore for MemoryStore {
    async fn find_academic_year_by_label(
        &self,
        label: &str,
    ) -> Result<Option<AcademicYear>, StoreError> {
        Ok(self.state().years.iter().find(|y| y.year_label == label).cloned())
    }

    async fn create_academic_year(&self, data: NewAcademicYear) -> Result<AcademicYear, StoreError> {
        let mut state = self.state();
        if state.years.iter().any(|y| y.year_label == data.year_label) {
            return Err(StoreError::Conflict {
                label: data.year_label,
            });
        }

        let year = AcademicYear {
            id: AcademicYearId(state.allocate_id()),
            year_label: data.year_label,
            start_date: data.start_date,
            end_date: data.end_date,
            is_active: data.is_active,
            is_current: data.is_current,
        };
        state.years.push(year.clone());
        Ok(year)
    }

    async fn create_semester(&self, data: NewSemester) -> Result<Semester, StoreError> {
        let mut state = self.state();
        if !state.years.iter().any(|y| y.id == data.academic_year_id) {
            return Err(StoreError::Backend(format!(
                "unknown academic year {}",
                data.academic_year_id
            )));
        }

        let semester = Semester {
            id: SemesterId(state.allocate_id()),
            academic_year_id: data.academic_year_id,
            name: data.name,
            order: data.order,
            start_date: data.start_date,
            end_date: data.end_date,
        };
        state.semesters.push(semester.clone());
        Ok(semester)
    }
}
