//! Contact form validation
//!
//! `validate_contact` is pure: the same three inputs always give the same
//! [`ValidationResult`]. All checks run (no short-circuit) and report in the
//! fixed order name, email, message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::locale::{Locale, MessageTable};

// Form whitespace is Unicode White_Space plus the byte-order mark (U+FEFF).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email regex")
});

fn is_form_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_space)
}

/// True if `email` (already trimmed) has the `local@domain.suffix` shape.
/// Consecutive dots in the domain pass; quoted local parts fail.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCheck {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
}

impl ContactCheck {
    pub fn message(self, table: &MessageTable) -> &'static str {
        match self {
            ContactCheck::NameRequired => table.name_required,
            ContactCheck::EmailRequired => table.email_required,
            ContactCheck::EmailInvalid => table.email_invalid,
            ContactCheck::MessageRequired => table.message_required,
        }
    }
}

/// Outcome of validating a contact submission.
///
/// Only built by [`validate_contact`], so `is_valid()` always agrees with
/// `error_lines().is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    failures: Vec<ContactCheck>,
    error_lines: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error_lines.is_empty()
    }

    pub fn failures(&self) -> &[ContactCheck] {
        &self.failures
    }

    pub fn error_lines(&self) -> &[String] {
        &self.error_lines
    }

    /// Error lines joined for a single message box.
    pub fn summary(&self) -> String {
        self.error_lines.join("\n")
    }
}

pub fn validate_contact(
    name: &str,
    email: &str,
    message: &str,
    locale: Locale,
) -> ValidationResult {
    let table = locale.messages();
    let mut failures = Vec::new();

    if trim_form(name).is_empty() {
        failures.push(ContactCheck::NameRequired);
    }

    let email = trim_form(email);
    if email.is_empty() {
        failures.push(ContactCheck::EmailRequired);
    } else if !is_valid_email(email) {
        failures.push(ContactCheck::EmailInvalid);
    }

    if trim_form(message).is_empty() {
        failures.push(ContactCheck::MessageRequired);
    }

    let error_lines = failures
        .iter()
        .map(|check| check.message(table).to_string())
        .collect();

    ValidationResult {
        failures,
        error_lines,
    }
}

/// Contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields were cleared; show the acknowledgment.
    Sent { acknowledgment: &'static str },
    /// Fields are left as typed.
    Rejected(ValidationResult),
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self, locale: Locale) -> ValidationResult {
        validate_contact(&self.name, &self.email, &self.message, locale)
    }

    /// Validate and, when everything passes, reset the fields.
    pub fn submit(&mut self, locale: Locale) -> SubmitOutcome {
        let result = self.validate(locale);
        if result.is_valid() {
            *self = Self::default();
            SubmitOutcome::Sent {
                acknowledgment: locale.messages().contact_sent,
            }
        } else {
            SubmitOutcome::Rejected(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_table() {
        let cases = [
            ("user@example.com", true),
            ("u@e.co", true),
            ("first+tag@mail.example.org", true),
            ("a@b..c", true),
            ("user@", false),
            ("user@example", false),
            ("user example.com", false),
            ("a@b", false),
            ("a@b.", false),
            ("a@b.c", true),
            ("a@@b.c", false),
            ("\"quoted\"@x", false),
        ];
        for (email, expected) in cases {
            assert_eq!(is_valid_email(email), expected, "{email}");
        }
    }

    #[test]
    fn test_all_empty_reports_three_lines_in_order() {
        let result = validate_contact("", "", "", Locale::En);
        assert!(!result.is_valid());
        assert_eq!(
            result.failures(),
            &[
                ContactCheck::NameRequired,
                ContactCheck::EmailRequired,
                ContactCheck::MessageRequired
            ]
        );
        assert_eq!(
            result.error_lines(),
            &[
                "Please enter your name.".to_string(),
                "Please enter your email.".to_string(),
                "Please enter your message.".to_string(),
            ]
        );
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let result = validate_contact("  \t", " ", "\n", Locale::En);
        assert_eq!(result.error_lines().len(), 3);
    }

    #[test]
    fn test_byte_order_mark_counts_as_space() {
        let result = validate_contact(
            "\u{FEFF}",
            "\u{FEFF}a@b.co\u{FEFF}",
            " \u{FEFF}\n",
            Locale::En,
        );
        assert_eq!(
            result.failures(),
            &[ContactCheck::NameRequired, ContactCheck::MessageRequired]
        );
        assert!(!is_valid_email("a\u{FEFF}b@c.co"));
    }

    #[test]
    fn test_email_is_trimmed_before_matching() {
        let result = validate_contact("Ada", "  ada@example.com \n", "hi", Locale::En);
        assert!(result.is_valid());
        assert!(result.error_lines().is_empty());
    }

    #[test]
    fn test_invalid_email_only() {
        let result = validate_contact("Ada", "user@example", "hello", Locale::Tr);
        assert_eq!(result.failures(), &[ContactCheck::EmailInvalid]);
        assert_eq!(result.summary(), "Lütfen geçerli email giriniz.");
    }

    #[test]
    fn test_summary_joins_with_newlines() {
        let result = validate_contact("", "nope", "", Locale::En);
        assert_eq!(
            result.summary(),
            "Please enter your name.\nPlease enter a valid email.\nPlease enter your message."
        );
    }

    #[test]
    fn test_submit_clears_only_on_success() {
        let mut form = ContactForm::new("Ada", "ada@", "hello");
        let outcome = form.submit(Locale::En);
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(form.email, "ada@");

        form.email = "ada@example.com".into();
        let outcome = form.submit(Locale::En);
        assert_eq!(
            outcome,
            SubmitOutcome::Sent {
                acknowledgment: "Your message was sent successfully."
            }
        );
        assert_eq!(form, ContactForm::default());
    }
}
