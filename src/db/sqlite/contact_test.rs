//! Tests for the SQLite contact repository.

use crate::db::{Contact, ContactFields, ContactRepository, Database, DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn make_contact(id: &str, name: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "5551234567".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_starts_empty() {
    let db = setup_db().await;

    let contacts = db.contacts().list_all().await.expect("List should succeed");
    assert!(contacts.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_and_get_by_id() {
    let db = setup_db().await;
    let repo = db.contacts();

    let contact = make_contact("c1", "Jordan");
    let inserted = repo.insert(&contact).await.expect("Insert should succeed");
    assert_eq!(inserted, contact);

    let fetched = repo.get_by_id("c1").await.expect("Get should succeed");
    assert_eq!(fetched, Some(contact));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_returns_none_when_absent() {
    let db = setup_db().await;

    let fetched = db.contacts().get_by_id("missing").await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_preserves_insertion_order() {
    let db = setup_db().await;
    let repo = db.contacts();

    // Ids deliberately out of lexical order
    for (id, name) in [("zz", "Zelda"), ("aa", "Aaron"), ("mm", "Morgan")] {
        repo.insert(&make_contact(id, name)).await.unwrap();
    }

    let ids: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["zz", "aa", "mm"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_duplicate_id_is_rejected() {
    let db = setup_db().await;
    let repo = db.contacts();

    repo.insert(&make_contact("dup", "Jordan")).await.unwrap();
    let result = repo.insert(&make_contact("dup", "Morgan")).await;

    match result {
        Err(DbError::AlreadyExists { entity_type, id }) => {
            assert_eq!(entity_type, "Contact");
            assert_eq!(id, "dup");
        }
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_by_id_keeps_id_and_replaces_fields() {
    let db = setup_db().await;
    let repo = db.contacts();
    repo.insert(&make_contact("c1", "Jordan")).await.unwrap();

    let fields = ContactFields {
        name: "Jordan Lee".to_string(),
        email: "jlee@example.org".to_string(),
        phone: "+44 20 7946 0958".to_string(),
    };
    let updated = repo
        .replace_by_id("c1", &fields)
        .await
        .unwrap()
        .expect("Contact should exist");

    assert_eq!(updated, Contact::new("c1", fields.clone()));
    assert_eq!(
        repo.get_by_id("c1").await.unwrap(),
        Some(Contact::new("c1", fields))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_by_id_returns_none_when_absent() {
    let db = setup_db().await;

    let fields = make_contact("x", "Jordan").fields();
    let updated = db.contacts().replace_by_id("missing", &fields).await.unwrap();

    assert!(updated.is_none());
    assert!(db.contacts().list_all().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_returns_removed_contact() {
    let db = setup_db().await;
    let repo = db.contacts();
    let contact = make_contact("c1", "Jordan");
    repo.insert(&contact).await.unwrap();

    let removed = repo.delete_by_id("c1").await.unwrap();
    assert_eq!(removed, Some(contact));
    assert!(repo.get_by_id("c1").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_twice_returns_none_second_time() {
    let db = setup_db().await;
    let repo = db.contacts();
    repo.insert(&make_contact("c1", "Jordan")).await.unwrap();

    assert!(repo.delete_by_id("c1").await.unwrap().is_some());
    assert!(repo.delete_by_id("c1").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_pool_surfaces_connection_error() {
    let db = setup_db().await;
    db.close().await;

    let result = db.contacts().list_all().await;
    assert!(matches!(result, Err(DbError::Connection { .. })));
}
