//! Domain failure to boundary payload translation.
//!
//! # Responsibility
//! - Map each lifecycle failure to its fixed status code and error label.
//! - Resolve localized message text and field-level detail from the catalog.
//!
//! # Invariants
//! - Only `ValidationFailed` carries field-level detail.
//! - Infrastructure failures surface as a generic 500 payload with no field
//!   detail and no internal text.

use crate::i18n::{message, message_with_id, Locale, MessageKey};
use crate::service::client_service::ClientServiceError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured, localized error payload handed to the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP-equivalent status code.
    pub status: u16,
    /// Short English status label, fixed per failure kind.
    pub error: &'static str,
    /// Localized summary message.
    pub message: String,
    /// Field path to localized message, present only for validation
    /// failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<&'static str, String>>,
}

/// Translates one lifecycle failure into its boundary payload.
pub fn translate_error(failure: &ClientServiceError, locale: Locale) -> ErrorResponse {
    match failure {
        ClientServiceError::ValidationFailed(violations) => {
            let errors = violations
                .iter()
                .map(|violation| (violation.field.path(), message(locale, violation.message).to_string()))
                .collect();
            ErrorResponse {
                status: 400,
                error: "Bad Request",
                message: message(locale, MessageKey::ValidationFailed).to_string(),
                errors: Some(errors),
            }
        }
        ClientServiceError::ClientDeleted(id) => ErrorResponse {
            status: 404,
            error: "Not Found",
            message: message_with_id(locale, MessageKey::ClientDeleted, *id),
            errors: None,
        },
        ClientServiceError::ClientNotFound(id) => ErrorResponse {
            status: 404,
            error: "Not Found",
            message: message_with_id(locale, MessageKey::ClientNotFound, *id),
            errors: None,
        },
        ClientServiceError::Repo(_) => ErrorResponse {
            status: 500,
            error: "Internal Server Error",
            message: message(locale, MessageKey::InternalError).to_string(),
            errors: None,
        },
    }
}
