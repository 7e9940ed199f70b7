// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Employee Workflow Integration Tests
//!
//! Files, contacts, notifications and the dashboard working together.

use std::sync::Arc;

use staffdesk_core::{
    ContactDraft, ContactManager, Dashboard, EventDispatcher, FileDraft, FileManager, FileType,
    MemoryBackend, NotificationCenter, NotificationKind, Profile,
};

/// Test: a new employee uploads files and builds a directory
#[tokio::test]
async fn test_employee_day_one() {
    let backend = Arc::new(MemoryBackend::new());
    let events = Arc::new(EventDispatcher::new());
    let files = FileManager::new(backend.clone(), events.clone());
    let contacts = ContactManager::new(backend.clone(), events);
    let notifications = NotificationCenter::new(backend.clone());
    let dashboard = Dashboard::new(backend.clone());

    // Upload three files, edit one, delete another
    let contract = files
        .create(
            "emp-7",
            &FileDraft::new("Contract", "https://files.example/contract.pdf")
                .with_type(FileType::Pdf),
        )
        .await
        .unwrap();
    let photo = files
        .create(
            "emp-7",
            &FileDraft::new("Badge photo", "https://files.example/badge.png")
                .with_type(FileType::Image),
        )
        .await
        .unwrap();
    files
        .create("emp-7", &FileDraft::new("Notes", "https://files.example/notes"))
        .await
        .unwrap();

    let mut draft = FileDraft::from(&contract);
    draft.description = Some("Signed copy".into());
    files.update("emp-7", &contract.id, &draft).await.unwrap();
    files.delete("emp-7", &photo.id).await.unwrap();

    // Directory
    contacts
        .create(
            "emp-7",
            &ContactDraft::new("Huda Mansour")
                .with_department("HR")
                .with_position("Manager"),
        )
        .await
        .unwrap();
    contacts
        .create("emp-7", &ContactDraft::new("IT Helpdesk").with_department("IT"))
        .await
        .unwrap();

    // 3 uploads + 1 update + 1 delete
    let unread = notifications.unread("emp-7").await.unwrap();
    assert_eq!(unread.len(), 5);
    assert_eq!(unread[0].kind, NotificationKind::FileDelete);

    notifications.mark_read(&unread[0].id).await.unwrap();

    let profile = Profile {
        id: "emp-7".into(),
        full_name: "Sara Nasser".into(),
        email: "sara@corp.example".into(),
        role: "employee".into(),
        department: Some("Finance".into()),
        storage_used: 4096,
    };
    let snapshot = dashboard.load("emp-7", Some(&profile)).await.unwrap();

    assert_eq!(snapshot.stats.total_files, 2);
    assert_eq!(snapshot.stats.total_contacts, 2);
    assert_eq!(snapshot.stats.unread_notifications, 4);
    assert_eq!(snapshot.stats.storage_used, 4096);
    assert_eq!(snapshot.recent_files[0].title, "Notes");

    let hr = contacts.search("emp-7", "hr").await.unwrap();
    assert_eq!(hr.len(), 1);
    assert_eq!(hr[0].name, "Huda Mansour");
}
