//! Name and number validation for contacts.
//!
//! Valid names:
//! - Between 2 and 50 characters (Unicode scalar values, so non-ASCII counts once)
//! - Any characters except line breaks
//!
//! Valid numbers:
//! - An optional single leading `+`
//! - Otherwise only ASCII digits and spaces
//! - Between 3 and 25 characters in total, the `+` included

use crate::error::{PhonebookError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const NUMBER_MIN_CHARS: usize = 3;
pub const NUMBER_MAX_CHARS: usize = 25;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^[^\r\n]{{{},{}}}$", NAME_MIN_CHARS, NAME_MAX_CHARS);
    Regex::new(&pattern).expect("name pattern is valid")
});

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ]+$").expect("number pattern is valid"));

/// Validates a contact name, returning it unchanged on success.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_name;
///
/// assert!(validate_name("Ann").is_ok());
/// assert!(validate_name("Дмитрий").is_ok());
///
/// assert!(validate_name("A").is_err());
/// assert!(validate_name("two\nlines").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<String> {
    if NAME_PATTERN.is_match(name) {
        Ok(name.to_string())
    } else {
        Err(PhonebookError::InvalidName(name.to_string()))
    }
}

/// Validates a phone number, returning it unchanged on success.
///
/// Numbers are compared as exact strings elsewhere, so no normalization
/// happens here: `"123 45"` and `"12345"` are different numbers.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_number;
///
/// assert!(validate_number("123").is_ok());
/// assert!(validate_number("+7 999 123 45 67").is_ok());
///
/// assert!(validate_number("abc").is_err());
/// assert!(validate_number("12").is_err());
/// assert!(validate_number("1+23").is_err());
/// ```
pub fn validate_number(number: &str) -> Result<String> {
    // The pattern only admits ASCII, so byte length is the character count.
    let len = number.len();
    if NUMBER_PATTERN.is_match(number) && (NUMBER_MIN_CHARS..=NUMBER_MAX_CHARS).contains(&len) {
        Ok(number.to_string())
    } else {
        Err(PhonebookError::InvalidNumber(number.to_string()))
    }
}
