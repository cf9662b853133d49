/// Months in an unconventional year
pub const MONTHS_PER_YEAR: u8 = 13;

/// Days in every unconventional month
pub const DAYS_PER_MONTH: u8 = 28;

/// Days in an unconventional year (13 × 28)
pub const DAYS_PER_YEAR: u32 = MONTHS_PER_YEAR as u32 * DAYS_PER_MONTH as u32;

/// First month of the year, used for lower bounds and rollover
pub const FIRST_MONTH: u8 = 1;

/// First day of month, used for lower bounds and rollover
pub const MIN_DAY: u8 = 1;

/// Months in the standard (Gregorian) calendar
pub const STANDARD_MONTHS_PER_YEAR: u32 = 12;

/// Nominal standard month length used by the proportional date mapping
pub const STANDARD_NOMINAL_MONTH_DAYS: u32 = 30;

/// Smallest year accepted by academic year generation
pub const MIN_YEAR: i32 = 1;

/// Largest year accepted by academic year generation (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Most academic years a single generation call may create
pub const MAX_GENERATION_COUNT: u32 = 10;

/// Number of future years created by background auto-generation
pub const AUTO_GENERATE_YEARS: u32 = 3;

/// Semester length used when the configuration omits one
pub const DEFAULT_SEMESTER_DAYS: u32 = 112;

/// Break length used when the configuration omits one
pub const DEFAULT_BREAK_DAYS: u32 = 14;

/// Separator between the two years of an academic year label
pub const LABEL_SEPARATOR: char = '-';

/// Display names of the unconventional months (index 0 is month 1)
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR as usize] = [
    "Primus",
    "Secundus",
    "Tertius",
    "Quartus",
    "Quintus",
    "Sextus",
    "Septimus",
    "Octavus",
    "Nonus",
    "Decimus",
    "Undecimus",
    "Duodecimus",
    "Terdecimus",
];
