//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the narrow client store contract consumed by the lifecycle
//!   service.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Store mutations own audit metadata: insert sets creation and
//!   modification fields, update refreshes modification fields.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod client_repo;
