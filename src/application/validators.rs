use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Validates that the input looks like a valid email address: something, an `@`,
/// something, a dot, something, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email)
}

/// Trims an optional free-text field, treating blank input as absent.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("user+tag@example.org"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("spaces in@email.com"));
        assert!(!is_valid_email(" padded@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_email_length_limit() {
        let local = "a".repeat(MAX_EMAIL_LEN - "@example.com".len());
        assert!(is_valid_email(&format!("{local}@example.com")));
        assert!(!is_valid_email(&format!("{local}a@example.com")));
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("")), None);
        assert_eq!(normalize_optional(Some("   ")), None);
        assert_eq!(
            normalize_optional(Some("  Landlord / PM ")),
            Some("Landlord / PM".to_string())
        );
    }
}
