use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";

const BIRTHDAY_INPUT_FORMATS: [&str; 2] = [BIRTHDAY_DISPLAY_FORMAT, "%Y-%m-%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Accepts `DD.MM.YYYY` or `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        BIRTHDAY_INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .map(Self)
            .ok_or_else(|| CoreError::InvalidBirthday(input.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Birthdate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_DISPLAY_FORMAT))
    }
}

impl FromStr for Birthdate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
