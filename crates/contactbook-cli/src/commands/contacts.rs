use contactbook_core::{CoreError, PhoneNumber, Record, RecordDto};
use tracing::debug;

use crate::commands::{to_json, CommandError, Session};

pub fn add_contact(session: &mut Session, name: &str, phone: &str) -> Result<String, CommandError> {
    let phone = PhoneNumber::parse(phone)?;
    let mut record = Record::new(name)?;
    record.add_phone(phone);

    if session.directory.contains(record.name()) {
        debug!(name = record.name(), "replacing existing contact");
    }
    session.directory.add_record(record);
    Ok("Contact added".to_string())
}

pub fn change_contact(
    session: &mut Session,
    name: &str,
    old: &str,
    new: &str,
) -> Result<String, CommandError> {
    if !session.directory.contains(name) {
        return Err(CoreError::ContactNotFound(name.to_string()).into());
    }
    let new = PhoneNumber::parse(new)?;
    // A value that does not parse was never stored.
    let old = PhoneNumber::parse(old).map_err(|_| CoreError::PhoneNotFound(old.to_string()))?;

    session.directory.find_mut(name)?.edit_phone(&old, new)?;
    debug!(name, "phone updated");
    Ok("Contact updated".to_string())
}

pub fn show_phone(session: &Session, name: &str) -> Result<String, CommandError> {
    let record = session.directory.find(name)?;
    if session.json {
        return to_json(&RecordDto::from(record).phones);
    }
    Ok(record.format_phones())
}

pub fn show_all(session: &Session) -> Result<String, CommandError> {
    if session.json {
        let dtos: Vec<RecordDto> = session.directory.values().map(RecordDto::from).collect();
        return to_json(&dtos);
    }

    if session.directory.is_empty() {
        return Ok("No contacts".to_string());
    }

    let lines: Vec<String> = session
        .directory
        .values()
        .map(ToString::to_string)
        .collect();
    Ok(lines.join("\n"))
}
