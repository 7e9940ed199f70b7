// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for api::contact_manager

mod common;

use common::fixtures::{contact_row, setup};
use staffdesk_core::backend::Table;
use staffdesk_core::records::ValidationError;
use staffdesk_core::*;

#[tokio::test]
async fn test_create_stores_blank_fields_as_null() {
    let (backend, events, log) = setup();
    let contacts = ContactManager::new(backend.clone(), events);

    let draft = ContactDraft::new("Nadia Karim")
        .with_email("nadia@corp.example")
        .with_phone("")
        .with_department("  ");
    let contact = contacts.create("u1", &draft).await.unwrap();

    assert_eq!(contact.name, "Nadia Karim");
    assert_eq!(contact.email.as_deref(), Some("nadia@corp.example"));
    assert_eq!(contact.phone, None);
    assert_eq!(contact.department, None);

    let rows = backend.rows(Table::Contacts);
    assert!(rows[0]["phone"].is_null());
    assert_eq!(
        log.events(),
        vec![StaffdeskEvent::ContactAdded {
            contact_id: contact.id
        }]
    );
}

#[tokio::test]
async fn test_name_required() {
    let (backend, events, _log) = setup();
    let contacts = ContactManager::new(backend.clone(), events);

    let err = contacts
        .create("u1", &ContactDraft::new(" ").with_email("x@y.z"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StaffdeskError::Validation(ValidationError::MissingField("name"))
    ));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_search_matches_multiple_fields() {
    let (backend, events, _log) = setup();
    backend.seed(
        Table::Contacts,
        [
            contact_row("u1", "Layla Haddad", "Finance"),
            contact_row("u1", "Omar Saleh", "Engineering"),
            contact_row("u1", "Rana Aziz", "Finance"),
            contact_row("u2", "Fin Outsider", "Finance"),
        ],
    );
    let contacts = ContactManager::new(backend, events);

    let finance: Vec<_> = contacts
        .search("u1", "finance")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(finance, vec!["Rana Aziz", "Layla Haddad"]);

    let by_email = contacts.search("u1", "OMAR@").await.unwrap();
    assert_eq!(by_email.len(), 1);

    assert_eq!(contacts.search("u1", "").await.unwrap().len(), 3);
    assert!(contacts.search("u1", "marketing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_delete() {
    let (backend, events, log) = setup();
    let contacts = ContactManager::new(backend.clone(), events);
    let contact = contacts
        .create("u1", &ContactDraft::new("Sami").with_position("Intern"))
        .await
        .unwrap();

    let draft = ContactDraft::from(&contact).with_position("Analyst");
    let updated = contacts.update(&contact.id, &draft).await.unwrap();
    assert_eq!(updated.position.as_deref(), Some("Analyst"));
    assert_eq!(updated.created_at, contact.created_at);

    let removed = contacts.delete(&contact.id).await.unwrap();
    assert_eq!(removed.name, "Sami");
    assert!(contacts.list("u1").await.unwrap().is_empty());
    assert_eq!(log.events().len(), 3);
}

#[tokio::test]
async fn test_missing_contact_is_not_found() {
    let (backend, events, _log) = setup();
    let contacts = ContactManager::new(backend, events);

    assert!(matches!(
        contacts.update("ghost", &ContactDraft::new("Ghost")).await,
        Err(StaffdeskError::NotFound(_))
    ));
    assert!(matches!(
        contacts.delete("ghost").await,
        Err(StaffdeskError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_get_is_scoped_to_owner() {
    let (backend, events, _log) = setup();
    backend.seed(Table::Contacts, [contact_row("u1", "Mina Farouk", "Legal")]);
    let id = backend.rows(Table::Contacts)[0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let contacts = ContactManager::new(backend, events);

    assert_eq!(contacts.get("u1", &id).await.unwrap().name, "Mina Farouk");
    assert!(matches!(
        contacts.get("u2", &id).await,
        Err(StaffdeskError::NotFound(_))
    ));
}
