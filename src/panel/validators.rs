//! # Field Validators
//!
//! Pure checks applied to form values. `is_digits_only` is the keystroke
//! gate for phone/pincode inputs; the boxed validators produce messages and
//! back the submit-time constraint check.

use regex::Regex;
use std::sync::OnceLock;

/// A message-producing validator
pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// True for the empty string and any string made only of ASCII digits
pub fn is_digits_only(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn max_length(max: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() > max {
            Err(format!("Maximum length is {max}"))
        } else {
            Ok(())
        }
    })
}

pub fn digits_only() -> Validator {
    Box::new(|value: &str| {
        if is_digits_only(value) {
            Ok(())
        } else {
            Err("Only digits are allowed".to_string())
        }
    })
}

/// Email shape check. Empty values pass; pair with `required` to reject them.
pub fn email() -> Validator {
    Box::new(|value: &str| {
        if value.is_empty() || email_regex().is_match(value) {
            Ok(())
        } else {
            Err("Please enter a valid email address".to_string())
        }
    })
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_digits_only_should_accept_empty_string() {
        assert!(is_digits_only(""));
    }

    #[test]
    fn is_digits_only_should_accept_ascii_digits() {
        assert!(is_digits_only("0123456789"));
        assert!(is_digits_only("7"));
    }

    #[test]
    fn is_digits_only_should_reject_any_non_digit() {
        for input in ["12a45", " 12", "12 ", "+91", "1.5", "-3", "abc"] {
            assert!(!is_digits_only(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn is_digits_only_should_reject_non_ascii_digits() {
        // Arabic-Indic and full-width digits are not 0-9
        assert!(!is_digits_only("٣"));
        assert!(!is_digits_only("１２"));
    }

    #[test]
    fn required_should_reject_blank_values() {
        let check = required();
        assert!(check("").is_err());
        assert!(check("   ").is_err());
        assert!(check("x").is_ok());
    }

    #[test]
    fn max_length_should_count_characters_not_bytes() {
        let check = max_length(3);
        assert!(check("äöü").is_ok());
        assert_eq!(check("abcd"), Err("Maximum length is 3".to_string()));
    }

    #[test]
    fn email_should_accept_plain_addresses() {
        let check = email();
        assert!(check("someone@example.com").is_ok());
        assert!(check("first.last+tag@sub.example.org").is_ok());
        assert!(check("").is_ok());
    }

    #[test]
    fn email_should_reject_malformed_addresses() {
        let check = email();
        assert!(check("someone").is_err());
        assert!(check("someone@").is_err());
        assert!(check("@example.com").is_err());
        assert!(check("someone@example").is_err());
    }

    #[test]
    fn digits_only_validator_should_match_predicate() {
        let check = digits_only();
        assert!(check("123").is_ok());
        assert!(check("12a").is_err());
    }
}
