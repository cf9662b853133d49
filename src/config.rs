use serde::{Deserialize, Serialize};

use crate::{
    DAYS_PER_MONTH, DEFAULT_BREAK_DAYS, DEFAULT_SEMESTER_DAYS, MONTHS_PER_YEAR, ValidationError,
};

/// Shape of the unconventional calendar and the academic layout on top of it.
///
/// Loaded once per process and read-only afterwards. Field names follow the
/// camelCase JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalendarConfig {
    pub months_per_year: u8,
    pub days_per_month: u8,
    /// Declared for compatibility; no algorithm consults it.
    #[serde(default)]
    pub leap_day_frequency: u32,

    pub academic_year_start_month: u8,
    pub academic_year_start_day: u8,
    pub semester_structure: SemesterStructure,

    /// Display only.
    pub days_per_week: u8,
    /// Display only.
    #[serde(default)]
    pub week_names: Vec<String>,

    #[serde(default)]
    pub fixed_holidays: Vec<FixedHoliday>,
    #[serde(default)]
    pub seasonal_adjustments: Vec<SeasonalAdjustment>,
}

/// Semester layout as parallel lists indexed by semester order.
/// Lists shorter than `count` fall back to per-index defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SemesterStructure {
    pub count: u32,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub duration_in_days: Vec<u32>,
    #[serde(default)]
    pub breaks_between: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedHoliday {
    pub name: String,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeasonalAdjustment {
    pub name: String,
    pub start_month: u8,
    pub start_day: u8,
    pub end_month: u8,
    pub end_day: u8,
    #[serde(default)]
    pub description: String,
}

fn holiday(name: &str, month: u8, day: u8) -> FixedHoliday {
    FixedHoliday {
        name: name.to_string(),
        month,
        day,
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months_per_year: MONTHS_PER_YEAR,
            days_per_month: DAYS_PER_MONTH,
            leap_day_frequency: 4,
            academic_year_start_month: 8,
            academic_year_start_day: 1,
            semester_structure: SemesterStructure {
                count: 3,
                names: vec![
                    "First Semester".to_string(),
                    "Second Semester".to_string(),
                    "Third Semester".to_string(),
                ],
                duration_in_days: vec![112, 112, 84],
                breaks_between: vec![14, 14, 28],
            },
            days_per_week: 7,
            week_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            fixed_holidays: vec![
                holiday("New Year's Day", 1, 1),
                holiday("Founders' Day", 3, 14),
                holiday("Midyear Day", 7, 14),
                holiday("Remembrance Day", 11, 21),
            ],
            seasonal_adjustments: vec![
                SeasonalAdjustment {
                    name: "Winter Recess".to_string(),
                    start_month: 13,
                    start_day: 1,
                    end_month: 13,
                    end_day: 28,
                    description: "Campus closed for the winter recess".to_string(),
                },
                SeasonalAdjustment {
                    name: "Summer Session".to_string(),
                    start_month: 6,
                    start_day: 1,
                    end_month: 7,
                    end_day: 28,
                    description: "Optional condensed courses".to_string(),
                },
            ],
        }
    }
}

fn check_month_day(what: &str, month: u8, day: u8) -> Result<(), ValidationError> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) || !(1..=DAYS_PER_MONTH).contains(&day) {
        return Err(ValidationError::InvalidConfig(format!(
            "{what} falls on month {month} day {day}"
        )));
    }
    Ok(())
}

impl CalendarConfig {
    /// Parses a JSON configuration and validates it.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidConfig` if the JSON is malformed or
    /// [`validate`](Self::validate) rejects it.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ValidationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes the 13 × 28 calendar and that
    /// every anchor, holiday and seasonal boundary is a real date in it.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidConfig` naming the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.months_per_year != MONTHS_PER_YEAR || self.days_per_month != DAYS_PER_MONTH {
            return Err(ValidationError::InvalidConfig(format!(
                "calendar shape must be {MONTHS_PER_YEAR} months of {DAYS_PER_MONTH} days, got {} of {}",
                self.months_per_year, self.days_per_month
            )));
        }
        check_month_day(
            "academic year start",
            self.academic_year_start_month,
            self.academic_year_start_day,
        )?;
        if self.semester_structure.count == 0 {
            return Err(ValidationError::InvalidConfig(
                "semester count must be at least 1".to_string(),
            ));
        }
        for h in &self.fixed_holidays {
            check_month_day(&h.name, h.month, h.day)?;
        }
        for s in &self.seasonal_adjustments {
            check_month_day(&format!("{} start", s.name), s.start_month, s.start_day)?;
            check_month_day(&format!("{} end", s.name), s.end_month, s.end_day)?;
        }
        Ok(())
    }

    /// Month holding the last day of the academic year: the month before the
    /// start month, wrapping to 13.
    pub const fn academic_year_end_month(&self) -> u8 {
        if self.academic_year_start_month <= 1 {
            MONTHS_PER_YEAR
        } else {
            self.academic_year_start_month - 1
        }
    }

    /// Name of the semester at zero-based `index`
    pub fn semester_name(&self, index: usize) -> String {
        self.semester_structure
            .names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Semester {}", index + 1))
    }

    /// Length in days of the semester at zero-based `index`
    pub fn semester_duration(&self, index: usize) -> u32 {
        self.semester_structure
            .duration_in_days
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_SEMESTER_DAYS)
    }

    /// Break in days following the semester at zero-based `index`
    pub fn semester_break(&self, index: usize) -> u32 {
        self.semester_structure
            .breaks_between
            .get(index)
            .copied()
            .unwrap_or(DEFAULT_BREAK_DAYS)
    }
}
