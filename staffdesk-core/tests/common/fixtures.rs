// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures
//!
//! Seeded in-memory backends and an event recorder.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};
use staffdesk_core::api::{CallbackHandler, EventDispatcher, StaffdeskEvent};
use staffdesk_core::backend::{MemoryBackend, Operation, Table};

/// Collects every dispatched event.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<StaffdeskEvent>>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<StaffdeskEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&StaffdeskEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|e| predicate(*e)).count()
    }
}

/// Dispatcher wired to a fresh [`EventLog`].
pub fn recording_dispatcher() -> (Arc<EventDispatcher>, EventLog) {
    let log = EventLog::default();
    let sink = Arc::clone(&log.events);

    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_handler(Arc::new(CallbackHandler::new(move |event| {
        sink.lock().push(event);
    })));

    (Arc::new(dispatcher), log)
}

/// Empty backend plus a recording dispatcher.
pub fn setup() -> (Arc<MemoryBackend>, Arc<EventDispatcher>, EventLog) {
    let (events, log) = recording_dispatcher();
    (Arc::new(MemoryBackend::new()), events, log)
}

pub fn file_row(user_id: &str, title: &str) -> Value {
    json!({
        "user_id": user_id,
        "title": title,
        "description": null,
        "file_type": "document",
        "file_url": format!("https://files.example/{}", title.to_lowercase().replace(' ', "-")),
        "file_size": 1024,
        "synced_at": null,
    })
}

pub fn contact_row(user_id: &str, name: &str, department: &str) -> Value {
    json!({
        "user_id": user_id,
        "name": name,
        "email": format!("{}@corp.example", name.split(' ').next().unwrap_or(name).to_lowercase()),
        "phone": null,
        "position": null,
        "department": department,
        "notes": null,
    })
}

pub fn notification_row(user_id: &str, title: &str, is_read: bool) -> Value {
    json!({
        "user_id": user_id,
        "title": title,
        "message": format!("{} message", title),
        "type": "file_upload",
        "is_read": is_read,
    })
}

pub fn seed_files(backend: &MemoryBackend, user_id: &str, titles: &[&str]) {
    backend.seed(Table::Files, titles.iter().map(|t| file_row(user_id, t)));
}

pub fn seed_contacts(backend: &MemoryBackend, user_id: &str, names: &[&str]) {
    backend.seed(
        Table::Contacts,
        names.iter().map(|n| contact_row(user_id, n, "Operations")),
    );
}

/// Scenario u1: three files and two contacts, plus another user's records.
pub fn seed_u1(backend: &MemoryBackend) {
    seed_files(backend, "u1", &["Payroll 2026", "Onboarding", "Org chart"]);
    seed_contacts(backend, "u1", &["Layla Haddad", "Omar Saleh"]);
    seed_files(backend, "someone-else", &["Not mine"]);
    seed_contacts(backend, "someone-else", &["Stranger"]);
}

pub fn file_updates(backend: &MemoryBackend) -> usize {
    backend.call_count(Table::Files, Operation::Update)
}

/// Lets spawned tasks run to their next await point.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
