//! Phone number validation (E.164-like)

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional `+`, a non-zero leading digit, then 1 to 14 more digits
pub const PHONE_PATTERN: &str = r"^\+?[1-9][0-9]{1,14}$";

pub const PHONE_MESSAGE: &str = "Invalid phone number format";

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

/// Returns true if the value looks like an E.164 phone number
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Validates phone number format
pub fn validate_phone(value: &str) -> Result<(), String> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(PHONE_MESSAGE.to_string())
    }
}
