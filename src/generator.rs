//! Academic year and semester generation against an [`AcademicYearStore`].

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::{
    AUTO_GENERATE_YEARS, AcademicYear, AcademicYearId, AcademicYearStore, CalendarConfig,
    CalendarError, CalendarEvent, Clock, DAYS_PER_MONTH, DateSpan, MAX_GENERATION_COUNT, MAX_YEAR,
    MIN_YEAR, NewAcademicYear, NewSemester, StoreError, SystemClock, UnconventionalDate,
    ValidationError, academic_year_label, calendar_events,
};

/// One semester of an academic year, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterPlan {
    /// 1-based position within the academic year
    pub order: u32,
    pub name: String,
    pub span: DateSpan,
}

/// Lays out the configured semesters back to back from `start`, each one
/// followed by its break before the next begins.
///
/// The spans never overlap in the unconventional calendar; their standard
/// equivalents may (see [`AcademicYearGenerator::generate_semesters`]).
pub fn plan_semesters(config: &CalendarConfig, start: UnconventionalDate) -> Vec<SemesterPlan> {
    let count = config.semester_structure.count;
    let mut plans = Vec::new();
    let mut cursor = start;

    for (index, order) in (0..count as usize).zip(1..=count) {
        let span = DateSpan::starting_at(cursor, config.semester_duration(index));
        cursor = span.end().add_days(config.semester_break(index).saturating_add(1));

        plans.push(SemesterPlan {
            order,
            name: config.semester_name(index),
            span,
        });
    }

    plans
}

fn standard(date: UnconventionalDate) -> Result<NaiveDate, CalendarError> {
    date.to_standard_date()
        .ok_or_else(|| ValidationError::UnrepresentableYear(date.year()).into())
}

/// Orders of semesters whose standard start date is not after the previous
/// semester's standard end date.
fn standard_collisions(semesters: &[NewSemester]) -> Vec<u32> {
    semesters
        .windows(2)
        .filter(|pair| pair[1].start_date <= pair[0].end_date)
        .map(|pair| pair[1].order)
        .collect()
}

/// Creates academic years and their semesters in a store.
///
/// Generation is create-if-absent keyed on the year label. The store's
/// unique constraint on that label is what makes concurrent generation safe:
/// a [`StoreError::Conflict`] on create means another caller won the race,
/// and the year is skipped like any other existing one.
pub struct AcademicYearGenerator<S, C = SystemClock> {
    config: CalendarConfig,
    store: S,
    clock: C,
}

impl<S: AcademicYearStore> AcademicYearGenerator<S> {
    /// Creates a generator that reads the current year from the system clock.
    ///
    /// The config is trusted as given: out-of-range anchor or holiday dates
    /// are clamped when used. Use [`try_new`](Self::try_new) to reject them.
    pub fn new(config: CalendarConfig, store: S) -> Self {
        Self {
            config,
            store,
            clock: SystemClock,
        }
    }

    /// Like [`new`](Self::new), but validates the config first.
    ///
    /// # Errors
    /// Returns `CalendarError::Validation` if
    /// [`CalendarConfig::validate`] rejects the config.
    pub fn try_new(config: CalendarConfig, store: S) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self::new(config, store))
    }
}

impl<S: AcademicYearStore, C: Clock> AcademicYearGenerator<S, C> {
    /// Replaces the clock used to decide the current year
    pub fn with_clock<K: Clock>(self, clock: K) -> AcademicYearGenerator<S, K> {
        AcademicYearGenerator {
            config: self.config,
            store: self.store,
            clock,
        }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Creates `count` consecutive academic years starting with the one that
    /// begins in `start_year`. Years whose label already exists are skipped.
    /// The first year of the batch is marked current.
    ///
    /// Years are committed one by one; an error aborts the remaining
    /// iterations but keeps what was already created.
    ///
    /// # Errors
    /// Returns `CalendarError::Validation` for an out-of-range `count` or
    /// `start_year`, and `CalendarError::Persistence` for any store failure
    /// other than a label conflict.
    pub async fn generate_academic_years(
        &self,
        start_year: i32,
        count: u32,
    ) -> Result<(), CalendarError> {
        if count == 0 || count > MAX_GENERATION_COUNT {
            return Err(ValidationError::InvalidCount(count).into());
        }
        // count is at most MAX_GENERATION_COUNT here
        let last_start = MAX_YEAR - i32::try_from(count).unwrap_or(MAX_YEAR);
        if start_year < MIN_YEAR || start_year > last_start {
            return Err(ValidationError::InvalidStartYear {
                start_year,
                count,
                last_start,
            }
            .into());
        }

        let mut created = 0_u32;
        for (offset, year) in (start_year..).take(count as usize).enumerate() {
            let label = academic_year_label(year);
            if self.store.find_academic_year_by_label(&label).await?.is_some() {
                debug!(%label, "academic year exists, skipping");
                continue;
            }

            let start = UnconventionalDate::new(
                year,
                i64::from(self.config.academic_year_start_month),
                i64::from(self.config.academic_year_start_day),
            );
            let end = UnconventionalDate::new(
                year + 1,
                i64::from(self.config.academic_year_end_month()),
                i64::from(DAYS_PER_MONTH),
            );

            let data = NewAcademicYear {
                year_label: label.clone(),
                start_date: standard(start)?,
                end_date: standard(end)?,
                is_active: true,
                is_current: offset == 0,
            };
            let academic_year = match self.store.create_academic_year(data).await {
                Ok(academic_year) => academic_year,
                Err(StoreError::Conflict { label }) => {
                    warn!(%label, "academic year created concurrently, skipping");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            info!(
                label = %academic_year.year_label,
                id = %academic_year.id,
                start = %academic_year.start_date,
                end = %academic_year.end_date,
                "academic year created"
            );

            self.generate_semesters(academic_year.id, start).await?;
            created += 1;
        }

        info!(start_year, count, created, "academic year generation finished");
        Ok(())
    }

    /// Stores the semesters of one academic year starting at `start`.
    ///
    /// Semesters are created in order; a failure part way leaves the earlier
    /// ones in place.
    ///
    /// The layout is strictly increasing in the unconventional calendar, but
    /// the standard dates are approximate: unconventional months 1 and 2 both
    /// map onto January, so short semesters or breaks there can store
    /// overlapping standard intervals. Such semesters are still stored, and a
    /// warning names each one.
    ///
    /// # Errors
    /// Returns `CalendarError::Persistence` if the store rejects a semester.
    pub async fn generate_semesters(
        &self,
        academic_year_id: AcademicYearId,
        start: UnconventionalDate,
    ) -> Result<(), CalendarError> {
        let semesters = plan_semesters(&self.config, start)
            .into_iter()
            .map(|plan| -> Result<NewSemester, CalendarError> {
                Ok(NewSemester {
                    academic_year_id,
                    name: plan.name,
                    order: plan.order,
                    start_date: standard(plan.span.start())?,
                    end_date: standard(plan.span.end())?,
                })
            })
            .collect::<Result<Vec<_>, CalendarError>>()?;

        for order in standard_collisions(&semesters) {
            warn!(
                %academic_year_id,
                order,
                "semester does not start after the previous one in standard dates"
            );
        }

        for data in semesters {
            let semester = self.store.create_semester(data).await?;
            debug!(
                %academic_year_id,
                order = semester.order,
                name = %semester.name,
                start = %semester.start_date,
                end = %semester.end_date,
                "semester created"
            );
        }
        Ok(())
    }

    /// Makes sure the current year and the next two exist.
    ///
    /// Background maintenance: failures are logged and never returned.
    pub async fn auto_generate_future_years(&self) {
        let year = self.clock.current_year();
        if let Err(e) = self.generate_academic_years(year, AUTO_GENERATE_YEARS).await {
            error!(error = %e, start_year = year, "auto-generation of academic years failed");
        }
    }

    /// Returns the academic year starting in the current real-world year,
    /// generating it first if it does not exist yet.
    ///
    /// # Errors
    /// Returns `CalendarError::NotFound` if the year is still missing after
    /// generation, or any error from
    /// [`generate_academic_years`](Self::generate_academic_years).
    pub async fn current_academic_year(&self) -> Result<AcademicYear, CalendarError> {
        let year = self.clock.current_year();
        let label = academic_year_label(year);

        if let Some(existing) = self.store.find_academic_year_by_label(&label).await? {
            return Ok(existing);
        }

        debug!(%label, "current academic year missing, generating");
        self.generate_academic_years(year, 1).await?;
        self.store
            .find_academic_year_by_label(&label)
            .await?
            .ok_or(CalendarError::NotFound { label })
    }

    /// Holiday, seasonal and academic boundary events for `year`
    pub fn unconventional_calendar_events(&self, year: i32) -> Vec<CalendarEvent> {
        calendar_events(year, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::{FixedClock, MemoryStore, Semester};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Memory store with call counters and injectable faults.
    #[derive(Default)]
    struct ScriptedStore {
        inner: MemoryStore,
        finds: AtomicUsize,
        year_creates: AtomicUsize,
        semester_creates: AtomicUsize,
        fail_find: bool,
        fail_create: bool,
        /// `find` never sees existing rows, as a racing caller would not.
        blind_find: bool,
        fail_semester_after: Option<usize>,
    }

    #[async_trait]
    impl AcademicYearStore for ScriptedStore {
        async fn find_academic_year_by_label(
            &self,
            label: &str,
        ) -> Result<Option<AcademicYear>, StoreError> {
            self.finds.fetch_add(1, Ordering::SeqCst);
            if self.fail_find {
                return Err(StoreError::Backend("connection reset".to_string()));
            }
            let found = if self.blind_find {
                None
            } else {
                self.inner.find_academic_year_by_label(label).await?
            };
            // Hand control back between the check and the caller's create
            tokio::task::yield_now().await;
            Ok(found)
        }

        async fn create_academic_year(
            &self,
            data: NewAcademicYear,
        ) -> Result<AcademicYear, StoreError> {
            self.year_creates.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(StoreError::Backend("constraint check failed".to_string()));
            }
            self.inner.create_academic_year(data).await
        }

        async fn create_semester(&self, data: NewSemester) -> Result<Semester, StoreError> {
            let done = self.semester_creates.fetch_add(1, Ordering::SeqCst);
            if self.fail_semester_after.is_some_and(|limit| done >= limit) {
                return Err(StoreError::Backend("write timeout".to_string()));
            }
            self.inner.create_semester(data).await
        }
    }

    fn generator(store: ScriptedStore) -> AcademicYearGenerator<ScriptedStore, FixedClock> {
        AcademicYearGenerator::new(CalendarConfig::default(), store).with_clock(FixedClock(2030))
    }

    #[tokio::test]
    async fn test_generate_creates_years_and_semesters() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2025, 3).await.unwrap();

        let years = generator.store().inner.academic_years();
        let labels: Vec<&str> = years.iter().map(|y| y.year_label.as_str()).collect();
        assert_eq!(labels, ["2025-2026", "2026-2027", "2027-2028"]);

        let current: Vec<bool> = years.iter().map(|y| y.is_current).collect();
        assert_eq!(current, [true, false, false]);
        assert!(years.iter().all(|y| y.is_active && y.end_date > y.start_date));

        for year in &years {
            assert_eq!(generator.store().inner.semesters_for(year.id).len(), 3);
        }
    }

    #[tokio::test]
    async fn test_generate_is_idempotent() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2025, 3).await.unwrap();
        generator.generate_academic_years(2025, 3).await.unwrap();

        let store = generator.store();
        assert_eq!(store.inner.academic_years().len(), 3);
        assert_eq!(store.year_creates.load(Ordering::SeqCst), 3);
        assert_eq!(store.semester_creates.load(Ordering::SeqCst), 9);
    }

    #[tokio::test]
    async fn test_generate_overlapping_batch_only_adds_missing_years() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2025, 2).await.unwrap();
        generator.generate_academic_years(2026, 2).await.unwrap();

        let years = generator.store().inner.academic_years();
        assert_eq!(years.len(), 3);
        assert_eq!(years[2].year_label, "2027-2028");
        // 2026-2027 was skipped, so the second batch marked nothing current
        assert!(!years[2].is_current);
    }

    #[tokio::test]
    async fn test_academic_year_dates() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2025, 1).await.unwrap();

        let year = &generator.store().inner.academic_years()[0];
        assert_eq!(year.start_date, ymd(2025, 7, 1));
        assert_eq!(year.end_date, ymd(2026, 6, 29));
    }

    #[tokio::test]
    async fn test_semesters_under_default_config() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2025, 1).await.unwrap();

        let store = &generator.store().inner;
        let year = &store.academic_years()[0];
        let semesters = store.semesters_for(year.id);

        let summary: Vec<(u32, &str, NaiveDate, NaiveDate)> = semesters
            .iter()
            .map(|s| (s.order, s.name.as_str(), s.start_date, s.end_date))
            .collect();
        assert_eq!(
            summary,
            [
                (1, "First Semester", ymd(2025, 7, 1), ymd(2025, 10, 29)),
                (2, "Second Semester", ymd(2025, 11, 16), ymd(2026, 2, 14)),
                (3, "Third Semester", ymd(2026, 3, 1), ymd(2026, 5, 29)),
            ]
        );

        for pair in semesters.windows(2) {
            assert!(pair[0].start_date < pair[0].end_date);
            assert!(pair[0].end_date < pair[1].start_date);
        }
        assert!(semesters.iter().all(|s| s.end_date <= year.end_date));
    }

    #[test]
    fn test_plan_semesters_spacing() {
        let config = CalendarConfig::default();
        let plans = plan_semesters(&config, UnconventionalDate::new(2025, 8, 1));
        assert_eq!(plans.len(), 3);

        let lengths: Vec<i64> = plans.iter().map(|p| p.span.len_days()).collect();
        assert_eq!(lengths, [112, 112, 84]);

        assert_eq!(plans[0].span.end(), UnconventionalDate::new(2025, 11, 28));
        assert_eq!(plans[1].span.start(), UnconventionalDate::new(2025, 12, 15));
        assert_eq!(plans[2].span.end(), UnconventionalDate::new(2026, 6, 28));

        for (i, pair) in plans.windows(2).enumerate() {
            assert!(!pair[0].span.overlaps(&pair[1].span));
            assert_eq!(
                pair[0].span.gap_before(&pair[1].span),
                Some(i64::from(config.semester_break(i)))
            );
        }
    }

    #[test]
    fn test_plan_semesters_fills_missing_entries() {
        let mut config = CalendarConfig::default();
        config.semester_structure.count = 4;

        let plans = plan_semesters(&config, UnconventionalDate::new(2025, 1, 1));
        let orders: Vec<u32> = plans.iter().map(|p| p.order).collect();
        assert_eq!(orders, [1, 2, 3, 4]);
        assert_eq!(plans[3].name, "Semester 4");
        assert_eq!(plans[3].span.len_days(), 112);
        assert_eq!(plans[2].span.gap_before(&plans[3].span), Some(28));
    }

    #[tokio::test]
    async fn test_generate_rejects_out_of_range_arguments() {
        let generator = generator(ScriptedStore::default());

        for (start_year, count) in [(2025, 0), (2025, 11), (0, 1), (-4, 3), (9995, 5), (9999, 1)] {
            let result = generator.generate_academic_years(start_year, count).await;
            assert!(
                matches!(result, Err(CalendarError::Validation(_))),
                "({start_year}, {count}) should be rejected"
            );
        }
        assert_eq!(generator.store().finds.load(Ordering::SeqCst), 0);

        assert!(generator.generate_academic_years(9998, 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_conflict_on_create_is_skipped() {
        let store = ScriptedStore {
            blind_find: true,
            ..ScriptedStore::default()
        };
        let existing = store
            .inner
            .create_academic_year(NewAcademicYear {
                year_label: "2026-2027".to_string(),
                start_date: ymd(2026, 7, 1),
                end_date: ymd(2027, 6, 29),
                is_active: true,
                is_current: false,
            })
            .await
            .unwrap();

        let generator = generator(store);
        generator.generate_academic_years(2025, 3).await.unwrap();

        let store = generator.store();
        assert_eq!(store.inner.academic_years().len(), 3);
        assert_eq!(store.year_creates.load(Ordering::SeqCst), 3);
        assert!(store.inner.semesters_for(existing.id).is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_generation_creates_each_year_once() {
        let store = Arc::new(ScriptedStore::default());
        let first = AcademicYearGenerator::new(CalendarConfig::default(), Arc::clone(&store));
        let second = AcademicYearGenerator::new(CalendarConfig::default(), Arc::clone(&store));

        // Both callers check each label before either creates it
        let (a, b) = tokio::join!(
            first.generate_academic_years(2025, 3),
            second.generate_academic_years(2025, 3)
        );
        a.unwrap();
        b.unwrap();

        assert!(store.year_creates.load(Ordering::SeqCst) > 3);

        let years = store.inner.academic_years();
        let labels: Vec<&str> = years.iter().map(|y| y.year_label.as_str()).collect();
        assert_eq!(labels, ["2025-2026", "2026-2027", "2027-2028"]);
        for year in &years {
            assert_eq!(store.inner.semesters_for(year.id).len(), 3);
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let generator = generator(ScriptedStore {
            fail_find: true,
            ..ScriptedStore::default()
        });

        let result = generator.generate_academic_years(2025, 3).await;
        assert!(matches!(
            result,
            Err(CalendarError::Persistence(StoreError::Backend(_)))
        ));
        assert_eq!(generator.store().finds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_semester_failure_keeps_partial_state() {
        let generator = generator(ScriptedStore {
            fail_semester_after: Some(1),
            ..ScriptedStore::default()
        });

        let result = generator.generate_academic_years(2025, 2).await;
        assert!(matches!(result, Err(CalendarError::Persistence(_))));

        let store = &generator.store().inner;
        let years = store.academic_years();
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].year_label, "2025-2026");
        assert_eq!(store.semesters_for(years[0].id).len(), 1);
    }

    #[tokio::test]
    async fn test_auto_generate_creates_three_years_from_clock() {
        let generator = generator(ScriptedStore::default());
        generator.auto_generate_future_years().await;

        let years = generator.store().inner.academic_years();
        let labels: Vec<&str> = years.iter().map(|y| y.year_label.as_str()).collect();
        assert_eq!(labels, ["2030-2031", "2031-2032", "2032-2033"]);
        assert!(years[0].is_current);
    }

    #[tokio::test]
    async fn test_auto_generate_swallows_errors() {
        let generator = generator(ScriptedStore {
            fail_find: true,
            ..ScriptedStore::default()
        });
        generator.auto_generate_future_years().await;

        assert!(generator.store().inner.academic_years().is_empty());
        assert_eq!(generator.store().finds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_current_academic_year_reuses_existing_row() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2030, 1).await.unwrap();

        let current = generator.current_academic_year().await.unwrap();
        assert_eq!(current.year_label, "2030-2031");
        assert!(current.is_current);
        assert_eq!(generator.store().year_creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_current_academic_year_generates_when_missing() {
        let generator = generator(ScriptedStore::default());

        let current = generator.current_academic_year().await.unwrap();
        assert_eq!(current.year_label, "2030-2031");
        assert_eq!(generator.store().inner.semesters_for(current.id).len(), 3);

        let again = generator.current_academic_year().await.unwrap();
        assert_eq!(again, current);
        assert_eq!(generator.store().year_creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_current_academic_year_not_found_after_generation() {
        let generator = generator(ScriptedStore {
            blind_find: true,
            ..ScriptedStore::default()
        });

        let result = generator.current_academic_year().await;
        assert_eq!(
            result,
            Err(CalendarError::NotFound {
                label: "2030-2031".to_string()
            })
        );
    }

    #[test]
    fn test_calendar_events_use_generator_config() {
        let generator = generator(ScriptedStore::default());
        let events = generator.unconventional_calendar_events(2025);
        assert_eq!(events.len(), 10);
        assert_eq!(events, calendar_events(2025, generator.config()));
    }

    #[tokio::test]
    async fn test_create_failure_propagates() {
        let generator = generator(ScriptedStore {
            fail_create: true,
            ..ScriptedStore::default()
        });

        let result = generator.generate_academic_years(2025, 3).await;
        assert!(matches!(
            result,
            Err(CalendarError::Persistence(StoreError::Backend(_)))
        ));
        let store = generator.store();
        assert_eq!(store.year_creates.load(Ordering::SeqCst), 1);
        assert!(store.inner.academic_years().is_empty());
        assert_eq!(store.semester_creates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_start_year_error_names_last_allowed_year() {
        let err = ValidationError::InvalidStartYear {
            start_year: 9995,
            count: 5,
            last_start: 9994,
        };
        assert!(err.to_string().ends_with("(range is 1-9994)"));
    }

    #[tokio::test]
    async fn test_start_year_error_reports_bound_for_count() {
        let generator = generator(ScriptedStore::default());
        let result = generator.generate_academic_years(9995, 5).await;
        assert_eq!(
            result,
            Err(CalendarError::Validation(ValidationError::InvalidStartYear {
                start_year: 9995,
                count: 5,
                last_start: 9994,
            }))
        );
    }

    fn two_month_layout() -> CalendarConfig {
        let mut config = CalendarConfig::default();
        config.academic_year_start_month = 1;
        config.semester_structure = crate::SemesterStructure {
            count: 2,
            names: vec![],
            duration_in_days: vec![28, 28],
            breaks_between: vec![0, 0],
        };
        config
    }

    #[test]
    fn test_standard_collisions_detects_shared_january() {
        let config = two_month_layout();
        let semesters: Vec<NewSemester> = plan_semesters(&config, UnconventionalDate::new(2025, 1, 1))
            .into_iter()
            .map(|plan| NewSemester {
                academic_year_id: AcademicYearId::from(1),
                name: plan.name,
                order: plan.order,
                start_date: plan.span.start().to_standard_date().unwrap(),
                end_date: plan.span.end().to_standard_date().unwrap(),
            })
            .collect();

        assert_eq!(standard_collisions(&semesters), [2]);
    }

    #[tokio::test]
    async fn test_colliding_layout_is_still_stored() {
        let config = two_month_layout();
        assert!(config.validate().is_ok());

        let generator = AcademicYearGenerator::new(config, ScriptedStore::default());
        generator.generate_academic_years(2025, 1).await.unwrap();

        let store = &generator.store().inner;
        let year = &store.academic_years()[0];
        let spans: Vec<(NaiveDate, NaiveDate)> = store
            .semesters_for(year.id)
            .iter()
            .map(|s| (s.start_date, s.end_date))
            .collect();
        assert_eq!(
            spans,
            [
                (ymd(2025, 1, 1), ymd(2025, 1, 29)),
                (ymd(2025, 1, 1), ymd(2025, 1, 29)),
            ]
        );
    }

    #[tokio::test]
    async fn test_default_layout_has_no_standard_collisions() {
        let generator = generator(ScriptedStore::default());
        generator.generate_academic_years(2025, 1).await.unwrap();

        let store = &generator.store().inner;
        let year = &store.academic_years()[0];
        let semesters: Vec<NewSemester> = store
            .semesters_for(year.id)
            .into_iter()
            .map(|s| NewSemester {
                academic_year_id: s.academic_year_id,
                name: s.name,
                order: s.order,
                start_date: s.start_date,
                end_date: s.end_date,
            })
            .collect();
        assert!(standard_collisions(&semesters).is_empty());
    }

    #[test]
    fn test_try_new_validates_config() {
        let mut config = CalendarConfig::default();
        config.academic_year_start_day = 29;
        let result = AcademicYearGenerator::try_new(config, ScriptedStore::default());
        assert!(matches!(
            result,
            Err(CalendarError::Validation(ValidationError::InvalidConfig(_)))
        ));

        assert!(AcademicYearGenerator::try_new(CalendarConfig::default(), ScriptedStore::default()).is_ok());
    }
}
