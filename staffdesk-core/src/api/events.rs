// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Callbacks for Staffdesk events.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Events emitted by Staffdesk.
#[derive(Debug, Clone, PartialEq)]
pub enum StaffdeskEvent {
    /// A file was created.
    FileCreated {
        /// The file ID.
        file_id: String,
    },

    /// A file was edited.
    FileUpdated {
        /// The file ID.
        file_id: String,
    },

    /// A file was deleted.
    FileDeleted {
        /// The file ID.
        file_id: String,
    },

    /// A contact was added.
    ContactAdded {
        /// The contact ID.
        contact_id: String,
    },

    /// A contact was updated.
    ContactUpdated {
        /// The contact ID.
        contact_id: String,
    },

    /// A contact was removed.
    ContactRemoved {
        /// The contact ID.
        contact_id: String,
    },

    /// The recurring schedule was established (or re-bound).
    AutoSyncStarted {
        /// User the schedule is bound to.
        user_id: String,
    },

    /// The recurring schedule was cancelled.
    AutoSyncStopped {
        /// User the schedule was bound to.
        user_id: String,
    },

    /// A sync pass completed.
    SyncCompleted {
        /// The synced user.
        user_id: String,
        /// Timestamp written to the records.
        synced_at: DateTime<Utc>,
    },

    /// A sync pass failed.
    SyncFailed {
        /// The user whose pass failed.
        user_id: String,
        /// Error description.
        error: String,
    },

    /// A scheduled tick was skipped because a pass was still running.
    SyncSkipped {
        /// The scheduled user.
        user_id: String,
    },

    /// A backup snapshot was assembled and audited.
    BackupCreated {
        /// The backed-up user.
        user_id: String,
        /// Number of file records in the snapshot.
        files_count: usize,
        /// Number of contact records in the snapshot.
        contacts_count: usize,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive Staffdesk events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: StaffdeskEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(StaffdeskEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(StaffdeskEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(StaffdeskEvent) + Send + Sync,
{
    fn on_event(&self, event: StaffdeskEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: StaffdeskEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
