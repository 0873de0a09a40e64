//! Option membership validation (dropdown, radio, country)

pub const OPTION_MESSAGE: &str = "Please select a valid option";
pub const COUNTRY_MESSAGE: &str = "Please select a valid country";

/// Supported country codes with their display names, in palette order
pub static COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("UK", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
];

/// Validates that the value is one of the allowed options
pub fn validate_one_of<S: AsRef<str>>(value: &str, options: &[S]) -> Result<(), String> {
    if options.iter().any(|o| o.as_ref() == value) {
        Ok(())
    } else {
        Err(OPTION_MESSAGE.to_string())
    }
}

/// Returns true if the value is a supported country code
pub fn is_country_code(value: &str) -> bool {
    COUNTRIES.iter().any(|(code, _)| *code == value)
}

/// Display name for a country code
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Validates that the value is a supported country code
pub fn validate_country(value: &str) -> Result<(), String> {
    if is_country_code(value) {
        Ok(())
    } else {
        Err(COUNTRY_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_membership() {
        let options = vec!["A".to_string(), "B".to_string()];
        assert!(validate_one_of("A", &options).is_ok());
        assert_eq!(
            validate_one_of("C", &options),
            Err(OPTION_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_empty_option_list_rejects_everything() {
        let options: Vec<String> = Vec::new();
        assert!(validate_one_of("A", &options).is_err());
    }

    #[test]
    fn test_country_codes() {
        assert!(validate_country("US").is_ok());
        assert!(validate_country("AU").is_ok());
        assert!(validate_country("us").is_err());
        assert!(validate_country("FR").is_err());
        assert_eq!(country_name("UK"), Some("United Kingdom"));
        assert_eq!(country_name("DE"), None);
    }
}
