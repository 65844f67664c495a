use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::error::invalid_input;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_today(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_input("invalid --today value: expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::parse_today;
    use chrono::NaiveDate;

    #[test]
    fn parse_today_accepts_iso_date() {
        assert_eq!(
            parse_today("2024-06-13").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()
        );
    }

    #[test]
    fn parse_today_rejects_other_formats() {
        assert!(parse_today("13.06.2024").is_err());
    }
}
