pub mod birthdays;
pub mod dates;

pub use birthdays::{
    congratulation_date, upcoming_birthdays, validate_window_days, UpcomingBirthday,
    DEFAULT_BIRTHDAY_WINDOW_DAYS, MAX_BIRTHDAY_WINDOW_DAYS,
};
pub use dates::{is_leap_year, next_occurrence, occurrence_in_year};
