use serde::{Deserialize, Serialize};

use crate::{CalendarConfig, DAYS_PER_MONTH, UnconventionalDate, prelude::*};

/// Kind of display event on the unconventional calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[display(fmt = "holiday")]
    Holiday,
    #[display(fmt = "seasonal")]
    Seasonal,
    #[display(fmt = "academic")]
    Academic,
}

/// A holiday, seasonal boundary or academic year boundary. Display only,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: UnconventionalDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    fn new(date: UnconventionalDate, name: String, kind: EventKind) -> Self {
        Self {
            date,
            name,
            kind,
            description: None,
        }
    }
}

/// Events for `year`: holidays, then seasonal start/end pairs, then the
/// academic year start and end.
///
/// The list is in that insertion order, not sorted by date.
pub fn calendar_events(year: i32, config: &CalendarConfig) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(
        config.fixed_holidays.len() + 2 * config.seasonal_adjustments.len() + 2,
    );

    for h in &config.fixed_holidays {
        events.push(CalendarEvent::new(
            UnconventionalDate::new(year, i64::from(h.month), i64::from(h.day)),
            h.name.clone(),
            EventKind::Holiday,
        ));
    }

    for s in &config.seasonal_adjustments {
        let bounds = [
            (s.start_month, s.start_day, "Start"),
            (s.end_month, s.end_day, "End"),
        ];
        for (month, day, edge) in bounds {
            events.push(CalendarEvent {
                description: Some(s.description.clone()),
                ..CalendarEvent::new(
                    UnconventionalDate::new(year, i64::from(month), i64::from(day)),
                    format!("{} ({edge})", s.name),
                    EventKind::Seasonal,
                )
            });
        }
    }

    events.push(CalendarEvent::new(
        UnconventionalDate::new(
            year,
            i64::from(config.academic_year_start_month),
            i64::from(config.academic_year_start_day),
        ),
        "Academic Year Start".to_string(),
        EventKind::Academic,
    ));
    events.push(CalendarEvent::new(
        UnconventionalDate::new(
            year.saturating_add(1),
            i64::from(config.academic_year_end_month()),
            i64::from(DAYS_PER_MONTH),
        ),
        "Academic Year End".to_string(),
        EventKind::Academic,
    ));

    events
}
