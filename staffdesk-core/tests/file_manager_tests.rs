// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for api::file_manager

mod common;

use common::fixtures::{seed_files, setup};
use staffdesk_core::backend::{Operation, Table};
use staffdesk_core::records::ValidationError;
use staffdesk_core::*;

fn notification_types(backend: &MemoryBackend) -> Vec<String> {
    backend
        .rows(Table::Notifications)
        .iter()
        .filter_map(|n| n["type"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_create_inserts_and_notifies() {
    let (backend, events, log) = setup();
    let files = FileManager::new(backend.clone(), events);

    let draft = FileDraft::new("  Handbook ", "https://files.example/handbook.pdf")
        .with_type(FileType::Pdf)
        .with_description("");
    let file = files.create("u1", &draft).await.unwrap();

    assert_eq!(file.title, "Handbook");
    assert_eq!(file.file_type, FileType::Pdf);
    assert_eq!(file.file_size, 0);
    assert_eq!(file.description, None);
    assert_eq!(file.user_id, "u1");

    let notifications = backend.rows(Table::Notifications);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["type"], "file_upload");
    assert_eq!(notifications[0]["title"], "New file");
    assert_eq!(notifications[0]["message"], "File \"Handbook\" uploaded");

    assert_eq!(
        log.events(),
        vec![StaffdeskEvent::FileCreated {
            file_id: file.id.clone()
        }]
    );
}

#[tokio::test]
async fn test_create_validates_before_any_call() {
    let (backend, events, _log) = setup();
    let files = FileManager::new(backend.clone(), events);

    let err = files
        .create("u1", &FileDraft::new("Handbook", "   "))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StaffdeskError::Validation(ValidationError::MissingField("file_url"))
    ));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first_and_scoped() {
    let (backend, events, _log) = setup();
    seed_files(&backend, "u1", &["First", "Second", "Third"]);
    seed_files(&backend, "u2", &["Other"]);
    let files = FileManager::new(backend, events);

    let titles: Vec<_> = files
        .list("u1")
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.title)
        .collect();

    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_update_stamps_synced_at_and_notifies() {
    let (backend, events, _log) = setup();
    let files = FileManager::new(backend.clone(), events);
    let file = files
        .create("u1", &FileDraft::new("Draft", "https://files.example/d"))
        .await
        .unwrap();
    assert!(file.synced_at.is_none());

    let mut draft = FileDraft::from(&file);
    draft.title = "Final".into();
    let updated = files.update("u1", &file.id, &draft).await.unwrap();

    assert_eq!(updated.title, "Final");
    assert!(updated.synced_at.is_some());
    assert_eq!(notification_types(&backend), vec!["file_upload", "file_update"]);
}

#[tokio::test]
async fn test_update_missing_file_is_not_found() {
    let (backend, events, _log) = setup();
    let files = FileManager::new(backend.clone(), events);

    let err = files
        .update("u1", "nope", &FileDraft::new("X", "https://x"))
        .await
        .unwrap_err();

    assert!(matches!(err, StaffdeskError::NotFound(_)));
    assert!(backend.rows(Table::Notifications).is_empty());
}

#[tokio::test]
async fn test_update_other_users_file_is_not_found() {
    let (backend, events, _log) = setup();
    seed_files(&backend, "u2", &["Private"]);
    let id = backend.rows(Table::Files)[0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let files = FileManager::new(backend.clone(), events);

    let result = files
        .update("u1", &id, &FileDraft::new("Mine now", "https://x"))
        .await;

    assert!(matches!(result, Err(StaffdeskError::NotFound(_))));
    assert_eq!(backend.rows(Table::Files)[0]["title"], "Private");
}

#[tokio::test]
async fn test_delete_returns_record_and_notifies() {
    let (backend, events, log) = setup();
    seed_files(&backend, "u1", &["Old policy"]);
    let files = FileManager::new(backend.clone(), events);
    let id = files.list("u1").await.unwrap()[0].id.clone();

    let deleted = files.delete("u1", &id).await.unwrap();

    assert_eq!(deleted.title, "Old policy");
    assert!(backend.rows(Table::Files).is_empty());
    assert_eq!(notification_types(&backend), vec!["file_delete"]);
    assert_eq!(
        backend.rows(Table::Notifications)[0]["message"],
        "File \"Old policy\" deleted"
    );
    assert_eq!(
        log.count(|e| matches!(e, StaffdeskEvent::FileDeleted { .. })),
        1
    );

    assert!(matches!(
        files.delete("u1", &id).await,
        Err(StaffdeskError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_mutation() {
    let (backend, events, _log) = setup();
    backend.fail_always(Table::Notifications, Operation::Insert, "quota");
    let files = FileManager::new(backend.clone(), events);

    let file = files
        .create("u1", &FileDraft::new("Roster", "https://files.example/r"))
        .await
        .unwrap();

    assert_eq!(backend.rows(Table::Files).len(), 1);
    assert_eq!(backend.call_count(Table::Notifications, Operation::Insert), 1);
    assert!(files.delete("u1", &file.id).await.is_ok());
}

#[tokio::test]
async fn test_backend_failure_propagates() {
    let (backend, events, _log) = setup();
    backend.fail_next(Table::Files, Operation::Insert, "offline");
    let files = FileManager::new(backend.clone(), events);

    let err = files
        .create("u1", &FileDraft::new("Roster", "https://files.example/r"))
        .await
        .unwrap_err();

    assert!(matches!(err, StaffdeskError::Backend(_)));
    assert_eq!(backend.call_count(Table::Notifications, Operation::Insert), 0);
}

#[tokio::test]
async fn test_get_by_id() {
    let (backend, events, _log) = setup();
    seed_files(&backend, "u1", &["Badge policy"]);
    let files = FileManager::new(backend.clone(), events);
    let id = backend.rows(Table::Files)[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    assert_eq!(files.get("u1", &id).await.unwrap().title, "Badge policy");
    assert!(matches!(
        files.get("u2", &id).await,
        Err(StaffdeskError::NotFound(_))
    ));
}
