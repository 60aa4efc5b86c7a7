//! Narrow-format validators used when saving contact fields.
//!
//! Both validators fail closed: an invalid value yields an empty string, never
//! an error, so a save path using them rejects the field instead of aborting.

use std::sync::OnceLock;

use regex::Regex;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .unwrap()
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Optional leading +, optional country digits, optional parenthesized
    // group, then digits with -, ., / and space separators.
    PATTERN.get_or_init(|| {
        Regex::new(r"^\+?[0-9]{0,4}[-\s./]*\(?[0-9]{1,4}\)?[-\s./0-9]*$").unwrap()
    })
}

/// Return `value` if it is a well-formed email address, else an empty string.
pub fn sanitize_email(value: &str) -> String {
    if email_pattern().is_match(value) {
        value.to_string()
    } else {
        String::new()
    }
}

/// Return `value` if it looks like a phone number, else an empty string.
pub fn sanitize_phone_number(value: &str) -> String {
    if phone_pattern().is_match(value) {
        value.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_passes_through() {
        assert_eq!(sanitize_email("a@b.com"), "a@b.com");
        assert_eq!(sanitize_email("first.last+tag@example.co.uk"), "first.last+tag@example.co.uk");
    }

    #[test]
    fn test_invalid_email_fails_closed() {
        assert_eq!(sanitize_email("not-an-email"), "");
        assert_eq!(sanitize_email(""), "");
        assert_eq!(sanitize_email("a b@c.com"), "");
        assert_eq!(sanitize_email("a@nodot"), "");
    }

    #[test]
    fn test_valid_phone_passes_through() {
        assert_eq!(sanitize_phone_number("+1 (555) 123-4567"), "+1 (555) 123-4567");
        assert_eq!(sanitize_phone_number("555-1234"), "555-1234");
        assert_eq!(sanitize_phone_number("(020) 7946.0958"), "(020) 7946.0958");
        assert_eq!(sanitize_phone_number("+49 30/123456"), "+49 30/123456");
    }

    #[test]
    fn test_invalid_phone_fails_closed() {
        assert_eq!(sanitize_phone_number("call me"), "");
        assert_eq!(sanitize_phone_number(""), "");
        assert_eq!(sanitize_phone_number("+"), "");
        assert_eq!(sanitize_phone_number("555x1234"), "");
    }
}
