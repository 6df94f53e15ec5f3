//! Client record and draft types.
//!
//! # Responsibility
//! - Define the canonical persisted client shape including audit metadata.
//! - Define the candidate (`ClientDraft`) validated before any mutation.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes or is reused.
//! - `deleted_at` is the source of truth for tombstone state; it transitions
//!   from `None` to `Some` exactly once and is never cleared.
//! - Audit fields are owned by the store layer; core code never mutates them
//!   directly.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ClientId = i64;

/// Canonical client record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Store-assigned identifier, unique and never reused.
    pub id: ClientId,
    /// Full name, 2-100 characters after trimming.
    pub full_name: String,
    /// Syntactically valid email address.
    pub email: String,
    /// Phone number valid under international numbering rules.
    pub phone_number: String,
    /// Soft-delete tombstone in epoch milliseconds. `None` while active.
    pub deleted_at: Option<i64>,
    /// Actor that created the record. Set once at insert.
    pub created_by: String,
    /// Creation time in epoch milliseconds. Set once at insert.
    pub created_at: i64,
    /// Actor of the most recent successful mutation.
    pub modified_by: String,
    /// Time of the most recent successful mutation in epoch milliseconds.
    pub modified_at: i64,
}

impl Client {
    /// Returns whether this record should be considered visible/active.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Candidate client data carried by create/update requests.
///
/// Drafts are validated by the validation engine before any store mutation;
/// the store never sees an unvalidated draft through the lifecycle service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

impl ClientDraft {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}
