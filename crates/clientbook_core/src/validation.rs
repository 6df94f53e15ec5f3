//! Client draft validation engine.
//!
//! # Responsibility
//! - Validate a candidate client draft against field constraints.
//! - Report the complete violation set for one pass, keyed by field path.
//!
//! # Invariants
//! - Validation is a pure function of the draft; no side effects.
//! - Rules never short-circuit: every violated field appears in the result.
//! - Phone parse failures are violations, never panics.

use crate::i18n::MessageKey;
use crate::model::client::ClientDraft;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum full-name length in characters, after trimming.
pub const FULL_NAME_MIN_CHARS: usize = 2;
/// Maximum full-name length in characters, after trimming.
pub const FULL_NAME_MAX_CHARS: usize = 100;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Draft fields addressable by validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    FullName,
    Email,
    PhoneNumber,
}

impl ClientField {
    /// Returns the boundary-facing field path for error payloads.
    pub fn path(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

/// One field-level validation failure.
///
/// Carries a message key rather than text so validation stays
/// locale-independent; the error translator resolves the catalog string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: ClientField,
    pub message: MessageKey,
}

/// Validates a client draft and returns the full violation set.
///
/// An empty result means the draft is valid. Rules are evaluated as an
/// explicit ordered list and all violations are collected.
pub fn validate_client_draft(draft: &ClientDraft) -> Vec<Violation> {
    let mut violations = Vec::new();

    let full_name = draft.full_name.trim();
    if full_name.is_empty() {
        violations.push(Violation {
            field: ClientField::FullName,
            message: MessageKey::FullNameRequired,
        });
    } else {
        let length = full_name.chars().count();
        if !(FULL_NAME_MIN_CHARS..=FULL_NAME_MAX_CHARS).contains(&length) {
            violations.push(Violation {
                field: ClientField::FullName,
                message: MessageKey::FullNameLength,
            });
        }
    }

    let email = draft.email.trim();
    if email.is_empty() {
        violations.push(Violation {
            field: ClientField::Email,
            message: MessageKey::EmailRequired,
        });
    } else if !EMAIL_RE.is_match(email) {
        violations.push(Violation {
            field: ClientField::Email,
            message: MessageKey::EmailInvalid,
        });
    }

    let phone_number = draft.phone_number.trim();
    if phone_number.is_empty() {
        violations.push(Violation {
            field: ClientField::PhoneNumber,
            message: MessageKey::PhoneRequired,
        });
    } else if !phone_number_is_valid(phone_number) {
        violations.push(Violation {
            field: ClientField::PhoneNumber,
            message: MessageKey::PhoneInvalid,
        });
    }

    violations
}

/// Checks one phone number under international numbering rules.
///
/// The region is inferred from the number itself, so input without a leading
/// `+` country prefix fails parsing and is reported as invalid.
fn phone_number_is_valid(value: &str) -> bool {
    match phonenumber::parse(None, value) {
        Ok(number) => phonenumber::is_valid(&number),
        Err(_) => false,
    }
}
