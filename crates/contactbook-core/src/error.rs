use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact not found: {0}")]
    ContactNotFound(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("birthday not set for {0}")]
    BirthdayNotSet(String),
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("invalid birthday: {0}")]
    InvalidBirthday(String),
    #[error("contact name is required")]
    EmptyName,
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    NotFound,
    InvalidFormat,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::ContactNotFound(_)
            | CoreError::PhoneNotFound(_)
            | CoreError::BirthdayNotSet(_) => CoreErrorKind::NotFound,
            CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday(_)
            | CoreError::EmptyName
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::InvalidFormat,
        }
    }
}
