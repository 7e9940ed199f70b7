// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staffdesk API Layer
//!
//! Headless screen logic over the Remote Data Client.
//!
//! # Overview
//!
//! Each manager owns an `Arc<dyn DataClient>`; the mutating ones also share
//! an [`EventDispatcher`]:
//! - [`FileManager`] lists and edits file records, notifying on each change
//! - [`ContactManager`] maintains the employee directory
//! - [`NotificationCenter`] reads and writes the notification feed
//! - [`Dashboard`] aggregates counts and recent activity
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staffdesk_core::api::{EventDispatcher, FileManager};
//! use staffdesk_core::backend::MemoryBackend;
//! use staffdesk_core::records::FileDraft;
//!
//! let client = Arc::new(MemoryBackend::new());
//! let files = FileManager::new(client, Arc::new(EventDispatcher::new()));
//!
//! let file = files
//!     .create("u1", &FileDraft::new("Handbook", "https://files/handbook.pdf"))
//!     .await?;
//! println!("created {}", file.id);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the API layer
//! - [`events`] - Event system for callbacks
//! - [`file_manager`] - File record operations
//! - [`contact_manager`] - Contact operations
//! - [`notifications`] - Notification feed
//! - [`dashboard`] - Dashboard aggregation

pub mod contact_manager;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod file_manager;
pub mod notifications;

pub use contact_manager::ContactManager;
pub use dashboard::{Dashboard, DashboardSnapshot, DashboardStats};
pub use error::{StaffdeskError, StaffdeskResult};
pub(crate) use error::require_user_id;
pub use events::{CallbackHandler, EventDispatcher, EventHandler, StaffdeskEvent};
pub use file_manager::FileManager;
pub use notifications::NotificationCenter;
