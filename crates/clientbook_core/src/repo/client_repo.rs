//! Client store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide soft-delete-aware persistence APIs over the `clients` table.
//! - Own identifier assignment and audit metadata on mutation paths.
//!
//! # Invariants
//! - Active queries are constrained to `deleted_at IS NULL`.
//! - `soft_delete` only transitions absent -> set; an existing tombstone
//!   timestamp is never overwritten.
//! - Each operation is a single SQL statement, so per-record writes are
//!   atomic with respect to each other.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::client::{Client, ClientDraft, ClientId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CLIENT_SELECT_SQL: &str = "SELECT
    id,
    full_name,
    email,
    phone_number,
    deleted_at,
    created_by,
    created_at,
    modified_by,
    modified_at
FROM clients";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "full_name",
    "email",
    "phone_number",
    "deleted_at",
    "created_by",
    "created_at",
    "modified_by",
    "modified_at",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ClientId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "client not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted client data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract for client lifecycle operations.
pub trait ClientRepository {
    /// Lists active clients in insertion order.
    fn list_active(&self) -> RepoResult<Vec<Client>>;
    /// Gets one client by id. Deleted rows remain reachable here.
    fn get_by_id(&self, id: ClientId) -> RepoResult<Option<Client>>;
    /// Returns true only when the record exists and is not soft-deleted.
    fn exists_active_by_id(&self, id: ClientId) -> RepoResult<bool>;
    /// Inserts a new record, assigning identifier and audit metadata.
    fn insert(&self, draft: &ClientDraft, actor: &str) -> RepoResult<Client>;
    /// Replaces the draft-carried fields and refreshes modification metadata.
    fn update(&self, id: ClientId, draft: &ClientDraft, actor: &str) -> RepoResult<Client>;
    /// Sets the soft-delete timestamp. Callers pre-check active existence.
    fn soft_delete(&self, id: ClientId) -> RepoResult<()>;
}

/// SQLite-backed client repository.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    /// Constructs a repository after verifying the connection is migrated
    /// and carries the required schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn list_active(&self) -> RepoResult<Vec<Client>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CLIENT_SELECT_SQL}
             WHERE deleted_at IS NULL
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut clients = Vec::new();
        while let Some(row) = rows.next()? {
            clients.push(parse_client_row(row)?);
        }

        Ok(clients)
    }

    fn get_by_id(&self, id: ClientId) -> RepoResult<Option<Client>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_client_row(row)?));
        }

        Ok(None)
    }

    fn exists_active_by_id(&self, id: ClientId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM clients
                WHERE id = ?1
                  AND deleted_at IS NULL
            );",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn insert(&self, draft: &ClientDraft, actor: &str) -> RepoResult<Client> {
        self.conn.execute(
            "INSERT INTO clients (
                full_name,
                email,
                phone_number,
                created_by,
                modified_by
            ) VALUES (?1, ?2, ?3, ?4, ?4);",
            params![
                draft.full_name.as_str(),
                draft.email.as_str(),
                draft.phone_number.as_str(),
                actor,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("inserted client {id} not found in read-back"))
        })
    }

    fn update(&self, id: ClientId, draft: &ClientDraft, actor: &str) -> RepoResult<Client> {
        let changed = self.conn.execute(
            "UPDATE clients
             SET
                full_name = ?2,
                email = ?3,
                phone_number = ?4,
                modified_by = ?5,
                modified_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![
                id,
                draft.full_name.as_str(),
                draft.email.as_str(),
                draft.phone_number.as_str(),
                actor,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("updated client {id} not found in read-back"))
        })
    }

    fn soft_delete(&self, id: ClientId) -> RepoResult<()> {
        // The tombstone guard keeps an earlier deletion timestamp intact if
        // this is ever called twice for the same id.
        let changed = self.conn.execute(
            "UPDATE clients
             SET deleted_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1
               AND deleted_at IS NULL;",
            [id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_client_row(row: &Row<'_>) -> RepoResult<Client> {
    Ok(Client {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        email: row.get("email")?,
        phone_number: row.get("phone_number")?,
        deleted_at: row.get("deleted_at")?,
        created_by: row.get("created_by")?,
        created_at: row.get("created_at")?,
        modified_by: row.get("modified_by")?,
        modified_at: row.get("modified_at")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "clients")? {
        return Err(RepoError::MissingRequiredTable("clients"));
    }

    for &column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "clients", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "clients",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
