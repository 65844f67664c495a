use contactbook_core::{
    upcoming_birthdays, validate_window_days, Birthdate, RecordDto, UpcomingBirthdayDto,
    BIRTHDAY_DISPLAY_FORMAT,
};
use tracing::debug;

use crate::commands::{to_json, CommandError, ReplCommand, Session};

pub fn add_birthday(session: &mut Session, name: &str, date: &str) -> Result<String, CommandError> {
    let record = session.directory.find_mut(name)?;
    let birthday = Birthdate::parse(date)?;
    record.add_birthday(birthday);
    Ok("Birthday added".to_string())
}

pub fn show_birthday(session: &Session, name: &str) -> Result<String, CommandError> {
    let record = session.directory.find(name)?;
    let birthday = record.birthday()?;
    if session.json {
        return to_json(&RecordDto::from(record).birthday);
    }
    Ok(birthday.to_string())
}

pub fn list_upcoming(session: &Session, days: Option<&str>) -> Result<String, CommandError> {
    let window_days = match days {
        Some(raw) => {
            let parsed: i64 = raw
                .parse()
                .map_err(|_| ReplCommand::Birthdays.usage_error())?;
            validate_window_days(parsed)?
        }
        None => session.window_days,
    };
    let today = session.today();
    debug!(%today, window_days, "computing upcoming birthdays");

    let upcoming = upcoming_birthdays(&session.directory, today, window_days);

    if session.json {
        let dtos: Vec<UpcomingBirthdayDto> =
            upcoming.iter().map(UpcomingBirthdayDto::from).collect();
        return to_json(&dtos);
    }

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays".to_string());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|item| {
            format!(
                "{}: {}",
                item.name,
                item.congratulation_date.format(BIRTHDAY_DISPLAY_FORMAT)
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
