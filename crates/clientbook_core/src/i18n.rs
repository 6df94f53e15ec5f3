//! Locale resolution and localized message catalog.
//!
//! # Responsibility
//! - Resolve a per-request language-preference tag into a supported locale.
//! - Own every user-facing message string, keyed by `MessageKey` + locale.
//!
//! # Invariants
//! - Unknown or empty tags resolve to the default locale.
//! - No other module holds user-facing text; the catalog is the single
//!   source of localized strings.

/// Supported response locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English, the default.
    #[default]
    En,
    /// Portuguese.
    Pt,
}

impl Locale {
    /// Resolves a language-preference tag (e.g. an `Accept-Language` value
    /// already extracted by the boundary layer) into a supported locale.
    ///
    /// The first entry whose primary language subtag matches a supported
    /// locale wins; quality weights are ignored beyond ordering. Absent or
    /// unparseable input yields the default locale.
    pub fn resolve(tag: Option<&str>) -> Self {
        let Some(raw) = tag else {
            return Self::default();
        };

        for entry in raw.split(',') {
            let language = entry
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .split('-')
                .next()
                .unwrap_or("");
            match language.to_ascii_lowercase().as_str() {
                "en" => return Self::En,
                "pt" => return Self::Pt,
                _ => continue,
            }
        }

        Self::default()
    }

    /// Returns the BCP 47 primary language subtag for this locale.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }
}

/// Stable keys for every localized message the core can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// Full name missing or blank after trimming.
    FullNameRequired,
    /// Full name outside the 2-100 character range.
    FullNameLength,
    /// Email missing or blank.
    EmailRequired,
    /// Email does not match the accepted grammar.
    EmailInvalid,
    /// Phone number missing or blank.
    PhoneRequired,
    /// Phone number failed parsing or validity classification.
    PhoneInvalid,
    /// Operation target is soft-deleted (or was never created).
    ClientDeleted,
    /// Operation target vanished between existence check and load.
    ClientNotFound,
    /// One or more fields failed validation.
    ValidationFailed,
    /// Infrastructure failure with no field detail.
    InternalError,
}

/// Returns the catalog text for one key in one locale.
pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => message_en(key),
        Locale::Pt => message_pt(key),
    }
}

/// Returns catalog text with the `{id}` placeholder substituted.
///
/// Used by identifier-bearing messages (`ClientDeleted`, `ClientNotFound`).
pub fn message_with_id(locale: Locale, key: MessageKey, id: i64) -> String {
    message(locale, key).replace("{id}", &id.to_string())
}

fn message_en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::FullNameRequired => "Full name must not be blank.",
        MessageKey::FullNameLength => "Full name must be between 2 and 100 characters.",
        MessageKey::EmailRequired => "Email must not be blank.",
        MessageKey::EmailInvalid => "Email must be a well-formed email address.",
        MessageKey::PhoneRequired => "Phone number must not be blank.",
        MessageKey::PhoneInvalid => "Phone number is not valid for the specified region.",
        MessageKey::ClientDeleted => "Client with ID {id} has been deleted.",
        MessageKey::ClientNotFound => "Client with ID {id} was not found.",
        MessageKey::ValidationFailed => "Validation failed for one or more fields.",
        MessageKey::InternalError => "An unexpected error occurred.",
    }
}

fn message_pt(key: MessageKey) -> &'static str {
    match key {
        MessageKey::FullNameRequired => "O nome completo não pode estar em branco.",
        MessageKey::FullNameLength => "O nome completo deve ter entre 2 e 100 caracteres.",
        MessageKey::EmailRequired => "O e-mail não pode estar em branco.",
        MessageKey::EmailInvalid => "O e-mail deve ser um endereço válido.",
        MessageKey::PhoneRequired => "O número de telefone não pode estar em branco.",
        MessageKey::PhoneInvalid => {
            "O número de telefone não é válido para a região especificada."
        }
        MessageKey::ClientDeleted => "O cliente com ID {id} foi excluído.",
        MessageKey::ClientNotFound => "O cliente com ID {id} não foi encontrado.",
        MessageKey::ValidationFailed => "A validação falhou para um ou mais campos.",
        MessageKey::InternalError => "Ocorreu um erro inesperado.",
    }
}
