use clientbook_core::db::open_db_in_memory;
use clientbook_core::{
    translate_error, ClientDraft, ClientService, ClientServiceError, Locale, RepoError,
    SqliteClientRepository,
};

fn validation_failure() -> ClientServiceError {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    service
        .create_client(&ClientDraft::new("J", "bad", "123"), "tester")
        .unwrap_err()
}

#[test]
fn validation_failure_translates_to_bad_request_with_field_errors() {
    let failure = validation_failure();
    let payload = translate_error(&failure, Locale::En);

    assert_eq!(payload.status, 400);
    assert_eq!(payload.error, "Bad Request");
    assert_eq!(payload.message, "Validation failed for one or more fields.");

    let errors = payload.errors.expect("field errors should be present");
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors["fullName"],
        "Full name must be between 2 and 100 characters."
    );
    assert_eq!(errors["email"], "Email must be a well-formed email address.");
    assert_eq!(
        errors["phoneNumber"],
        "Phone number is not valid for the specified region."
    );
}

#[test]
fn validation_failure_localizes_to_portuguese() {
    let failure = validation_failure();
    let payload = translate_error(&failure, Locale::Pt);

    assert_eq!(payload.status, 400);
    assert_eq!(payload.message, "A validação falhou para um ou mais campos.");
    let errors = payload.errors.expect("field errors should be present");
    assert_eq!(
        errors["fullName"],
        "O nome completo deve ter entre 2 e 100 caracteres."
    );
}

#[test]
fn deleted_client_translates_to_not_found_without_field_errors() {
    let payload = translate_error(&ClientServiceError::ClientDeleted(42), Locale::En);

    assert_eq!(payload.status, 404);
    assert_eq!(payload.error, "Not Found");
    assert_eq!(payload.message, "Client with ID 42 has been deleted.");
    assert!(payload.errors.is_none());
}

#[test]
fn missing_client_translates_to_not_found_without_field_errors() {
    let payload = translate_error(&ClientServiceError::ClientNotFound(7), Locale::Pt);

    assert_eq!(payload.status, 404);
    assert_eq!(payload.error, "Not Found");
    assert_eq!(payload.message, "O cliente com ID 7 não foi encontrado.");
    assert!(payload.errors.is_none());
}

#[test]
fn infrastructure_failure_translates_to_generic_500() {
    let failure = ClientServiceError::Repo(RepoError::InvalidData("boom".to_string()));
    let payload = translate_error(&failure, Locale::En);

    assert_eq!(payload.status, 500);
    assert_eq!(payload.error, "Internal Server Error");
    assert_eq!(payload.message, "An unexpected error occurred.");
    assert!(payload.errors.is_none());
    assert!(!payload.message.contains("boom"));
}

#[test]
fn payload_serializes_with_camel_case_and_omits_absent_errors() {
    let not_found = translate_error(&ClientServiceError::ClientDeleted(1), Locale::En);
    let json = serde_json::to_value(&not_found).unwrap();
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Not Found");
    assert!(json.get("errors").is_none());

    let invalid = translate_error(&validation_failure(), Locale::En);
    let json = serde_json::to_value(&invalid).unwrap();
    assert!(json["errors"].get("fullName").is_some());
    assert!(json["errors"].get("phoneNumber").is_some());
}
