use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Anchored at the start only; anything after a word boundary is ignored.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?-?([0-9]{3})-?([0-9]{4})\b").expect("valid phone regex")
});

/// Returns true when `input` starts with one of the accepted 10-digit shapes:
/// `(XXX)-XXX-XXXX`, `XXX-XXX-XXXX`, `(XXX)XXXXXXX` or `XXXXXXXXXX`.
pub fn validate_phone(input: &str) -> bool {
    PHONE_RE.is_match(input.trim_start())
}

/// A validated phone number, stored as its 10 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let caps = PHONE_RE
            .captures(input.trim_start())
            .ok_or_else(|| CoreError::InvalidPhone(input.to_string()))?;
        let digits = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl FromStr for PhoneNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_phone, PhoneNumber};
    use crate::error::CoreError;

    #[test]
    fn validate_phone_accepts_all_shapes() {
        assert!(validate_phone("(050)-123-4567"));
        assert!(validate_phone("050-123-4567"));
        assert!(validate_phone("(050)1234567"));
        assert!(validate_phone("0501234567"));
    }

    #[test]
    fn validate_phone_rejects_wrong_digit_counts() {
        assert!(!validate_phone("050123456"));
        assert!(!validate_phone("05012345678"));
        assert!(!validate_phone("050-123-456"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn validate_phone_rejects_letters_in_digit_positions() {
        assert!(!validate_phone("05O1234567"));
        assert!(!validate_phone("abc-def-ghij"));
        assert!(!validate_phone("0501234567abc"));
    }

    #[test]
    fn validate_phone_tolerates_trailing_text_after_boundary() {
        assert!(validate_phone("050-123-4567 ext 12"));
        assert!(validate_phone("0501234567;"));
    }

    #[test]
    fn parse_strips_formatting() {
        let phone = PhoneNumber::parse("(050)-123-4567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        let phone = PhoneNumber::parse("  050-123-4567 home").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn deserialize_goes_through_parse() {
        assert!(serde_json::from_str::<PhoneNumber>("\"abc\"").is_err());
        assert!(serde_json::from_str::<PhoneNumber>("\"not a phone\"").is_err());

        let phone: PhoneNumber = serde_json::from_str("\"(050)-123-4567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"0501234567\"");
    }

    #[test]
    fn parse_rejects_invalid_input() {
        let err = PhoneNumber::parse("12345").unwrap_err();
        assert_eq!(err, CoreError::InvalidPhone("12345".to_string()));
    }
}
