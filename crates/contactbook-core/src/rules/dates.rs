use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The date a yearly `month`/`day` falls on in `year`. Feb 29 moves to Feb 28
/// in non-leap years.
pub fn occurrence_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First occurrence of `month`/`day` on or after `today`.
pub fn next_occurrence(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(today.year(), month, day)?;
    if this_year >= today {
        return Some(this_year);
    }
    occurrence_in_year(today.year() + 1, month, day)
}
