mod common;

use common::{create_test_contact, create_test_pool};

use ab_db::{ContactRepository, DbError};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_contact_when_inserted_then_query_all_returns_it() {
    // Given: An empty repository
    let repo = ContactRepository::new(create_test_pool().await);
    let contact = create_test_contact("Ada Lovelace");

    // When: Inserting the contact
    let id = repo.insert(&contact).await.unwrap();

    // Then: find_all returns it with the assigned id
    let all = repo.find_all().await.unwrap();
    assert_that!(all, len(eq(1)));
    assert_that!(all[0].id, some(eq(id)));
    assert_that!(all[0].name, eq("Ada Lovelace"));
    assert_that!(all[0].email, eq("ada.lovelace@example.com"));
    assert_that!(all[0].is_active, eq(true));
}

#[tokio::test]
async fn given_existing_contact_when_deleted_then_query_all_omits_it() {
    // Given: Two stored contacts
    let repo = ContactRepository::new(create_test_pool().await);
    let keep_id = repo.insert(&create_test_contact("Grace")).await.unwrap();
    let drop_id = repo.insert(&create_test_contact("Linus")).await.unwrap();
    let stored = repo.find_by_id(drop_id).await.unwrap().unwrap();

    // When: Deleting one of them
    let removed = repo.delete(&stored).await.unwrap();

    // Then: Only the other remains
    assert_that!(removed, eq(1));
    let all = repo.find_all().await.unwrap();
    assert_that!(all, len(eq(1)));
    assert_that!(all[0].id, some(eq(keep_id)));
}

#[tokio::test]
async fn given_existing_contact_when_updated_then_same_id_has_new_values() {
    // Given: A stored contact
    let repo = ContactRepository::new(create_test_pool().await);
    let id = repo.insert(&create_test_contact("Ada")).await.unwrap();
    let stored = repo.find_by_id(id).await.unwrap().unwrap();

    // When: Updating every editable field
    let edited = stored.with_fields("Ada King", "ada@king.org", "+44 20 7946 0000");
    let changed = repo.update(&edited).await.unwrap();

    // Then: The row keeps its identity with the new values
    assert_that!(changed, eq(1));
    let all = repo.find_all().await.unwrap();
    assert_that!(all, len(eq(1)));
    assert_that!(all[0].id, some(eq(id)));
    assert_that!(all[0].name, eq("Ada King"));
    assert_that!(all[0].email, eq("ada@king.org"));
    assert_that!(all[0].phone_number, eq("+44 20 7946 0000"));
}

#[tokio::test]
async fn given_contacts_when_querying_all_then_ordered_by_name() {
    // Given: Contacts inserted out of order
    let repo = ContactRepository::new(create_test_pool().await);
    for name in ["Margaret", "Alan", "Barbara"] {
        repo.insert(&create_test_contact(name)).await.unwrap();
    }

    // When
    let all = repo.find_all().await.unwrap();

    // Then
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alan", "Barbara", "Margaret"]);
}

#[tokio::test]
async fn given_contact_with_existing_id_when_inserted_then_row_is_replaced() {
    // Given: A stored contact
    let repo = ContactRepository::new(create_test_pool().await);
    let id = repo.insert(&create_test_contact("Ada")).await.unwrap();

    // When: Inserting a different record under the same id
    let mut replacement = create_test_contact("Grace");
    replacement.id = Some(id);
    let replaced_id = repo.insert(&replacement).await.unwrap();

    // Then: Still one row, holding the replacement
    assert_that!(replaced_id, eq(id));
    let all = repo.find_all().await.unwrap();
    assert_that!(all, len(eq(1)));
    assert_that!(all[0].name, eq("Grace"));
}

#[tokio::test]
async fn given_unsaved_contact_when_updated_then_missing_identity_error() {
    // Given
    let repo = ContactRepository::new(create_test_pool().await);

    // When
    let result = repo.update(&create_test_contact("Ada")).await;

    // Then
    assert!(matches!(result, Err(DbError::MissingIdentity { .. })));
}

#[tokio::test]
async fn given_unknown_id_when_updated_or_deleted_then_no_rows_change() {
    // Given
    let repo = ContactRepository::new(create_test_pool().await);
    let mut ghost = create_test_contact("Ghost");
    ghost.id = Some(404);

    // When / Then
    assert_that!(repo.update(&ghost).await.unwrap(), eq(0));
    assert_that!(repo.delete_by_id(404).await.unwrap(), eq(0));
    assert_that!(repo.find_by_id(404).await.unwrap(), none());
}

#[tokio::test]
async fn given_contacts_when_cleared_then_table_is_empty() {
    // Given
    let repo = ContactRepository::new(create_test_pool().await);
    repo.insert(&create_test_contact("Ada")).await.unwrap();
    repo.insert(&create_test_contact("Grace")).await.unwrap();

    // When
    let removed = repo.clear().await.unwrap();

    // Then
    assert_that!(removed, eq(2));
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_inactive_contact_when_stored_then_flag_round_trips_and_is_not_filtered() {
    // Given
    let repo = ContactRepository::new(create_test_pool().await);
    let mut contact = create_test_contact("Ada");
    contact.is_active = false;

    // When
    let id = repo.insert(&contact).await.unwrap();

    // Then
    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_that!(found.is_active, eq(false));
    assert_that!(repo.find_all().await.unwrap(), len(eq(1)));
}
