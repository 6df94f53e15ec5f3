//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into lifecycle operations.
//! - Keep boundary layers decoupled from storage details.

pub mod client_service;
