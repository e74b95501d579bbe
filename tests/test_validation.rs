//! Tests for the submission validation workflow: uniqueness, field checks,
//! and error aggregation.

mod mocks;

use contact_book_server::domain::ContactId;
use contact_book_server::models::{Contact, ContactForm};
use contact_book_server::validation::{validate_submission, Mode};
use mocks::MockContactStore;

fn stored_contact(name: &str) -> Contact {
    Contact {
        id: ContactId::generate(),
        name: name.to_string(),
        phone_number: "081234567890".to_string(),
        email: None,
    }
}

fn form(name: &str, phone: &str, email: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        phone_number: phone.to_string(),
        email: email.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn valid_create_passes_all_checks() {
    let store = MockContactStore::new();
    let form = form("Ana", "081234567890", "ana@x.com");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    assert!(errors.is_empty());
}

#[tokio::test]
async fn create_with_taken_name_is_rejected() {
    let store = MockContactStore::new();
    store.add_contact(stored_contact("Ana"));
    let form = form("Ana", "081234567890", "");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "name");
    assert!(errors[0].message.contains("already exists"));
}

#[tokio::test]
async fn update_with_unchanged_name_never_blocks() {
    let store = MockContactStore::new();
    store.add_contact(stored_contact("Ana"));
    let form = form("Ana", "081234567890", "");

    let mode = Mode::Update {
        previous_name: "Ana".to_string(),
    };
    let errors = validate_submission(&store, &form, mode).await.unwrap();
    assert!(errors.is_empty());
}

#[tokio::test]
async fn update_renaming_onto_taken_name_is_rejected() {
    let store = MockContactStore::new();
    store.add_contact(stored_contact("Ana"));
    store.add_contact(stored_contact("Budi"));
    let form = form("Ana", "081234567890", "");

    let mode = Mode::Update {
        previous_name: "Budi".to_string(),
    };
    let errors = validate_submission(&store, &form, mode).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "name");
}

#[tokio::test]
async fn update_renaming_onto_free_name_passes() {
    let store = MockContactStore::new();
    store.add_contact(stored_contact("Budi"));
    let form = form("Ana", "081234567890", "");

    let mode = Mode::Update {
        previous_name: "Budi".to_string(),
    };
    let errors = validate_submission(&store, &form, mode).await.unwrap();
    assert!(errors.is_empty());
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let store = MockContactStore::new();
    let form = form("   ", "081234567890", "");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "name");
    assert!(errors[0].message.contains("empty"));
}

#[tokio::test]
async fn invalid_email_is_reported() {
    let store = MockContactStore::new();
    let form = form("Ana", "081234567890", "not-an-email");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "email");
}

#[tokio::test]
async fn empty_email_skips_the_email_check() {
    let store = MockContactStore::new();
    let form = form("Ana", "081234567890", "   ");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    assert!(errors.is_empty());
}

#[tokio::test]
async fn invalid_phone_is_reported() {
    let store = MockContactStore::new();
    let form = form("Ana", "123", "");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "phoneNumber");
}

#[tokio::test]
async fn all_failures_are_collected_together() {
    let store = MockContactStore::new();
    store.add_contact(stored_contact("Ana"));
    let form = form("Ana", "123", "not-an-email");

    let errors = validate_submission(&store, &form, Mode::Create).await.unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["name", "email", "phoneNumber"]);
}

#[tokio::test]
async fn store_failure_aborts_the_workflow() {
    let store = MockContactStore::new();
    store.fail_next();
    let form = form("Ana", "081234567890", "");

    let result = validate_submission(&store, &form, Mode::Create).await;
    assert!(result.is_err());
}
