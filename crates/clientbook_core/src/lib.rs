//! Core domain logic for Clientbook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod error_response;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use error_response::{translate_error, ErrorResponse};
pub use i18n::{Locale, MessageKey};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{Client, ClientDraft, ClientId};
pub use repo::client_repo::{ClientRepository, RepoError, RepoResult, SqliteClientRepository};
pub use service::client_service::{ClientService, ClientServiceError};
pub use validation::{validate_client_draft, ClientField, Violation};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
