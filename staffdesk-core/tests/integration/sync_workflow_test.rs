// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync Workflow Integration Tests
//!
//! Auto-sync, manual sync and backup over records created by the managers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use staffdesk_core::backend::Table;
use staffdesk_core::{
    CallbackHandler, ContactDraft, ContactManager, EventDispatcher, FileDraft, FileManager,
    MemoryBackend, StaffdeskEvent, SyncService, SyncState,
};

/// Test: session-long auto-sync with a backup in between
#[tokio::test(start_paused = true)]
async fn test_sync_session_workflow() {
    let backend = Arc::new(MemoryBackend::new());

    let completed = Arc::new(AtomicUsize::new(0));
    let completed_clone = completed.clone();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_handler(Arc::new(CallbackHandler::new(move |event| {
        if matches!(event, StaffdeskEvent::SyncCompleted { .. }) {
            completed_clone.fetch_add(1, Ordering::SeqCst);
        }
    })));
    let events = Arc::new(dispatcher);

    let files = FileManager::new(backend.clone(), events.clone());
    let contacts = ContactManager::new(backend.clone(), events.clone());
    for title in ["Policy", "Timesheet"] {
        files
            .create("u1", &FileDraft::new(title, format!("https://files.example/{title}")))
            .await
            .unwrap();
    }
    contacts
        .create("u1", &ContactDraft::new("Payroll desk"))
        .await
        .unwrap();

    let sync = SyncService::new(backend.clone(), events, Duration::from_secs(60));
    assert!(sync.last_synced_at("u1").await.unwrap().is_none());

    // Sign-in starts auto-sync
    let started = sync.start_auto_sync("u1").await.unwrap();
    assert_eq!(started.initial_pass.unwrap().files_synced, 2);
    let first_sync = sync.last_synced_at("u1").await.unwrap().unwrap();

    tokio::time::sleep(Duration::from_secs(150)).await;
    assert_eq!(completed.load(Ordering::SeqCst), 3);

    // Settings screen: backup then manual sync
    let snapshot = sync.create_backup("u1").await.unwrap();
    assert_eq!(snapshot.files_count(), 2);
    assert_eq!(snapshot.contacts_count(), 1);
    assert_eq!(backend.rows(Table::ActivityLogs).len(), 1);

    sync.sync_now("u1").await.unwrap();
    let latest = sync.last_synced_at("u1").await.unwrap().unwrap();
    assert!(latest >= first_sync);

    // Sign-out stops it
    assert!(sync.stop_auto_sync());
    assert_eq!(sync.state(), SyncState::Idle);
    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(completed.load(Ordering::SeqCst), 4);
}
