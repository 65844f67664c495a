pub mod birthday;
pub mod phone;
pub mod record;

pub use birthday::{Birthdate, BIRTHDAY_DISPLAY_FORMAT};
pub use phone::{validate_phone, PhoneNumber};
pub use record::Record;
