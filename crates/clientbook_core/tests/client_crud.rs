use clientbook_core::db::migrations::latest_version;
use clientbook_core::db::open_db_in_memory;
use clientbook_core::{ClientDraft, ClientRepository, RepoError, SqliteClientRepository};
use rusqlite::Connection;

fn valid_draft() -> ClientDraft {
    ClientDraft::new("John Doe", "john.doe@example.com", "+14155552671")
}

#[test]
fn insert_assigns_id_and_audit_metadata() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let client = repo.insert(&valid_draft(), "seed").unwrap();

    assert!(client.id > 0);
    assert_eq!(client.full_name, "John Doe");
    assert_eq!(client.created_by, "seed");
    assert_eq!(client.modified_by, "seed");
    assert!(client.created_at > 0);
    assert!(client.deleted_at.is_none());
}

#[test]
fn inserted_ids_are_monotonic_and_list_follows_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let first = repo.insert(&valid_draft(), "seed").unwrap();
    let second = repo
        .insert(
            &ClientDraft::new("Jane Roe", "jane@example.com", "+442071838750"),
            "seed",
        )
        .unwrap();

    assert!(second.id > first.id);

    let ids: Vec<_> = repo
        .list_active()
        .unwrap()
        .into_iter()
        .map(|client| client.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn deleted_ids_are_never_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let first = repo.insert(&valid_draft(), "seed").unwrap();
    repo.soft_delete(first.id).unwrap();
    conn.execute("DELETE FROM clients WHERE id = ?1;", [first.id])
        .unwrap();

    let second = repo.insert(&valid_draft(), "seed").unwrap();
    assert!(second.id > first.id);
}

#[test]
fn get_by_id_reaches_deleted_rows_but_list_active_does_not() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let client = repo.insert(&valid_draft(), "seed").unwrap();
    repo.soft_delete(client.id).unwrap();

    assert!(repo.list_active().unwrap().is_empty());

    let tombstoned = repo.get_by_id(client.id).unwrap().unwrap();
    assert!(tombstoned.deleted_at.is_some());
    assert!(!tombstoned.is_active());
}

#[test]
fn exists_active_by_id_combines_existence_and_deletion() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let client = repo.insert(&valid_draft(), "seed").unwrap();
    assert!(repo.exists_active_by_id(client.id).unwrap());
    assert!(!repo.exists_active_by_id(client.id + 1000).unwrap());

    repo.soft_delete(client.id).unwrap();
    assert!(!repo.exists_active_by_id(client.id).unwrap());
}

#[test]
fn update_replaces_fields_and_refreshes_modification_metadata() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let created = repo.insert(&valid_draft(), "seed").unwrap();
    let updated = repo
        .update(
            created.id,
            &ClientDraft::new("Jane Roe", "jane@example.com", "+442071838750"),
            "editor",
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.full_name, "Jane Roe");
    assert_eq!(updated.email, "jane@example.com");
    assert_eq!(updated.modified_by, "editor");
    assert_eq!(updated.created_by, "seed");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.modified_at >= created.modified_at);
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let err = repo.update(9999, &valid_draft(), "editor").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9999)));
}

#[test]
fn soft_delete_sets_tombstone_once_and_never_overwrites_it() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let client = repo.insert(&valid_draft(), "seed").unwrap();
    repo.soft_delete(client.id).unwrap();

    let first_tombstone = repo.get_by_id(client.id).unwrap().unwrap().deleted_at;
    assert!(first_tombstone.is_some());

    let err = repo.soft_delete(client.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == client.id));

    let second_tombstone = repo.get_by_id(client.id).unwrap().unwrap().deleted_at;
    assert_eq!(first_tombstone, second_tombstone);
}

#[test]
fn soft_delete_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let err = repo.soft_delete(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteClientRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_clients_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteClientRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("clients"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_clients_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone_number TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteClientRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "clients",
            column: "deleted_at"
        })
    ));
}
