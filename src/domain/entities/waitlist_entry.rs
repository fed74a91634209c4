use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_optional},
};

/// An email address that passed waitlist validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(raw: &str) -> AppResult<Self> {
        if is_valid_email(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidInput("Valid email required".into()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One waitlist row, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub email: WaitlistEmail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl WaitlistEntry {
    pub fn new(email: &str, name: Option<&str>, role: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            email: WaitlistEmail::parse(email)?,
            name: normalize_optional(name),
            role: normalize_optional(role),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_invalid_email() {
        let err = WaitlistEmail::parse("nope").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "Valid email required"));
    }

    #[test]
    fn entry_drops_blank_optional_fields() {
        let entry = WaitlistEntry::new("a@b.co", Some(" "), Some("")).unwrap();
        assert_eq!(entry.email.as_str(), "a@b.co");
        assert!(entry.name.is_none());
        assert!(entry.role.is_none());
    }

    #[test]
    fn entry_serializes_without_absent_fields() {
        let entry = WaitlistEntry::new("a@b.co", None, Some("Contractor")).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.co", "role": "Contractor" }));
    }
}
