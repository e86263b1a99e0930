use once_cell::sync::Lazy;
use regex::Regex;

use super::{Field, FormFields};
use crate::error::ValidationError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// `local@domain.tld` shape only; no length or IDN rules.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// All fields present, then email shape. Reports the first problem found.
pub fn validate(fields: &FormFields) -> Result<(), ValidationError> {
    for field in Field::ALL {
        if fields.get(field).is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail(fields.email.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.za"));
        assert!(is_valid_email("a@b.c.d.e.f"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn reports_first_missing_field() {
        let f = FormFields {
            name: String::new(),
            email: String::new(),
            message: "hi".into(),
        };
        assert_eq!(validate(&f), Err(ValidationError::MissingField(Field::Name)));
    }

    #[test]
    fn whitespace_counts_as_present() {
        let f = FormFields {
            name: " ".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        assert_eq!(validate(&f), Ok(()));
    }
}
