use crate::domain::{Record, BIRTHDAY_DISPLAY_FORMAT};
use crate::rules::UpcomingBirthday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record.birthday().ok().map(|date| date.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdayDto {
    pub name: String,
    pub congratulation_date: String,
}

impl From<&UpcomingBirthday> for UpcomingBirthdayDto {
    fn from(item: &UpcomingBirthday) -> Self {
        Self {
            name: item.name.clone(),
            congratulation_date: item
                .congratulation_date
                .format(BIRTHDAY_DISPLAY_FORMAT)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordDto, UpcomingBirthdayDto};
    use crate::domain::{Birthdate, PhoneNumber, Record};
    use crate::rules::UpcomingBirthday;
    use chrono::NaiveDate;

    #[test]
    fn record_dto_serializes_phones_and_birthday() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone(PhoneNumber::parse("(050)-123-4567").unwrap());
        record.add_birthday(Birthdate::parse("10.12.1815").unwrap());

        let value = serde_json::to_value(RecordDto::from(&record)).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["phones"][0], "0501234567");
        assert_eq!(value["birthday"], "10.12.1815");
    }

    #[test]
    fn upcoming_dto_formats_date() {
        let item = UpcomingBirthday {
            name: "Ada".to_string(),
            congratulation_date: NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
        };
        let dto = UpcomingBirthdayDto::from(&item);
        assert_eq!(dto.congratulation_date, "17.06.2024");
    }
}
