use crate::domain::birthday::Birthdate;
use crate::domain::phone::PhoneNumber;
use crate::error::CoreError;
use std::fmt;

/// One contact: a unique name, its phones in insertion order and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthdate>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }

        Ok(Self {
            name: trimmed.to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replaces the first phone equal to `old`. Leaves the list untouched on failure.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> Result<(), CoreError> {
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| **phone == *old)
            .ok_or_else(|| CoreError::PhoneNotFound(old.to_string()))?;
        *slot = new;
        Ok(())
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn format_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn add_birthday(&mut self, birthday: Birthdate) {
        self.birthday = Some(birthday);
    }

    pub fn birthday(&self) -> Result<Birthdate, CoreError> {
        self.birthday
            .ok_or_else(|| CoreError::BirthdayNotSet(self.name.clone()))
    }

    pub(crate) fn birthday_opt(&self) -> Option<Birthdate> {
        self.birthday
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.format_phones()
        )?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
