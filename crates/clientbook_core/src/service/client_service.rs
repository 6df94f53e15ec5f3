//! Client lifecycle service.
//!
//! # Responsibility
//! - Orchestrate validation, existence checks, and store mutations for the
//!   client record lifecycle.
//! - Signal every domain failure as a typed value for boundary translation.
//!
//! # Invariants
//! - Per record the only state transition is Active -> Deleted; nothing
//!   leaves Deleted.
//! - On update, the existence/deletion check runs before validation so a
//!   deleted target reports a deletion conflict even when the candidate is
//!   also invalid.
//! - Delete is idempotent: a missing or already-deleted target is a silent
//!   success.

use crate::model::client::{Client, ClientDraft, ClientId};
use crate::repo::client_repo::{ClientRepository, RepoError};
use crate::validation::{validate_client_draft, Violation};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Domain failure for client lifecycle operations.
///
/// All variants are recoverable at the boundary layer; none are fatal to
/// the process.
#[derive(Debug)]
pub enum ClientServiceError {
    /// The candidate draft violated field constraints.
    ValidationFailed(Vec<Violation>),
    /// The operation target is soft-deleted, or was never created. The
    /// pre-check deliberately does not distinguish the two.
    ClientDeleted(ClientId),
    /// The target vanished between the existence check and the load.
    ClientNotFound(ClientId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ClientServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed(violations) => {
                write!(f, "validation failed for {} field(s)", violations.len())
            }
            Self::ClientDeleted(id) => write!(f, "client deleted: {id}"),
            Self::ClientNotFound(id) => write!(f, "client not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ClientServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ClientServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ClientNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Lifecycle service facade over repository implementations.
pub struct ClientService<R: ClientRepository> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all active clients in creation order.
    ///
    /// Never produces a domain failure; only infrastructure errors surface.
    pub fn list_clients(&self) -> Result<Vec<Client>, ClientServiceError> {
        info!("event=client_list module=service status=start");
        let clients = self.repo.list_active()?;
        info!(
            "event=client_list module=service status=ok count={}",
            clients.len()
        );
        Ok(clients)
    }

    /// Creates a new client from a validated draft.
    ///
    /// # Contract
    /// - Fails with `ValidationFailed` carrying the full violation set.
    /// - The created record is always active with store-assigned id and
    ///   creation metadata.
    pub fn create_client(
        &self,
        draft: &ClientDraft,
        actor: &str,
    ) -> Result<Client, ClientServiceError> {
        self.ensure_valid(draft)?;

        info!("event=client_create module=service status=start");
        let client = self.repo.insert(draft, actor)?;
        info!(
            "event=client_create module=service status=ok client_id={}",
            client.id
        );
        Ok(client)
    }

    /// Updates an existing active client from a validated draft.
    ///
    /// # Contract
    /// - A deleted or never-created target fails with `ClientDeleted` before
    ///   validation runs.
    /// - `ClientNotFound` covers only the defensive race between the
    ///   existence check and the load.
    /// - Modification metadata is refreshed by the store layer.
    pub fn update_client(
        &self,
        id: ClientId,
        draft: &ClientDraft,
        actor: &str,
    ) -> Result<Client, ClientServiceError> {
        if !self.repo.exists_active_by_id(id)? {
            warn!("event=client_update module=service status=conflict client_id={id} reason=deleted");
            return Err(ClientServiceError::ClientDeleted(id));
        }

        self.ensure_valid(draft)?;

        let existing = self
            .repo
            .get_by_id(id)?
            .ok_or(ClientServiceError::ClientNotFound(id))?;

        debug!(
            "event=client_update module=service status=loaded client_id={}",
            existing.id
        );

        let updated = self.repo.update(existing.id, draft, actor)?;
        info!(
            "event=client_update module=service status=ok client_id={}",
            updated.id
        );
        Ok(updated)
    }

    /// Soft-deletes a client by id.
    ///
    /// # Contract
    /// - Missing or already-deleted targets succeed without touching the
    ///   store.
    /// - A successful deletion is terminal; the record never returns to the
    ///   active listing.
    pub fn delete_client(&self, id: ClientId) -> Result<(), ClientServiceError> {
        info!("event=client_delete module=service status=start client_id={id}");
        if !self.repo.exists_active_by_id(id)? {
            info!("event=client_delete module=service status=noop client_id={id}");
            return Ok(());
        }

        self.repo.soft_delete(id)?;
        info!("event=client_delete module=service status=ok client_id={id}");
        Ok(())
    }

    fn ensure_valid(&self, draft: &ClientDraft) -> Result<(), ClientServiceError> {
        debug!("event=client_validate module=service status=start");
        let violations = validate_client_draft(draft);
        if !violations.is_empty() {
            warn!(
                "event=client_validate module=service status=invalid violation_count={}",
                violations.len()
            );
            return Err(ClientServiceError::ValidationFailed(violations));
        }
        Ok(())
    }
}
