//! Client domain model.
//!
//! # Responsibility
//! - Define the canonical client record used by core business logic.
//! - Define the draft shape carried by create/update requests.
//!
//! # Invariants
//! - Every client is identified by a store-assigned `ClientId`.
//! - Deletion is represented by a soft-delete timestamp, not hard delete.

pub mod client;
