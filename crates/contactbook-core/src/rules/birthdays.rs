use crate::directory::Directory;
use crate::error::CoreError;
use crate::rules::dates::next_occurrence;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;
pub const MAX_BIRTHDAY_WINDOW_DAYS: i64 = 365;

// Every next occurrence lies within this many days of today.
const OCCURRENCE_HORIZON_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_BIRTHDAY_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// Moves Saturday and Sunday to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return occurrence,
    };
    occurrence
        .checked_add_signed(Duration::days(shift))
        .unwrap_or(occurrence)
}

/// Contacts whose next birthday falls in `[today, today + window_days)`, ordered by
/// congratulation date and then by name. Windows wider than a year behave like a
/// year; negative windows select nothing.
pub fn upcoming_birthdays(
    directory: &Directory,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday> {
    let window = window_days.clamp(0, OCCURRENCE_HORIZON_DAYS + 1);
    // `None` only near the end of the calendar, where nothing is out of range.
    let window_end = today.checked_add_signed(Duration::days(window));

    let mut upcoming: Vec<UpcomingBirthday> = directory
        .values()
        .filter_map(|record| {
            let birthday = record.birthday_opt()?;
            let occurrence = next_occurrence(today, birthday.month(), birthday.day())?;
            if window_end.is_some_and(|end| occurrence >= end) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(occurrence),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}
