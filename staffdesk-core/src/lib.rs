//! Staffdesk Core Library
//!
//! Client-side core for employee file and contact management against a
//! hosted relational backend: records, sessions, headless screen logic and
//! the periodic sync coordinator.

pub mod api;
pub mod auth;
pub mod backend;
pub mod config;
pub mod records;
pub mod sync;

pub use api::{
    CallbackHandler, ContactManager, Dashboard, DashboardSnapshot, DashboardStats,
    EventDispatcher, EventHandler, FileManager, NotificationCenter, StaffdeskError,
    StaffdeskEvent, StaffdeskResult,
};
pub use auth::{AuthError, AuthProvider, AuthUser, Session, SessionStore};
pub use backend::{BackendError, DataClient, MemoryBackend, Query, QueryResponse, Table};
pub use config::BackendConfig;
pub use records::{
    ActivityAction, ActivityLogEntry, BackupSnapshot, ContactDraft, ContactRecord, FileDraft,
    FileRecord, FileType, Notification, NotificationKind, Profile, RecentFile,
};
pub use sync::{AutoSyncStarted, SyncReport, SyncService, SyncState};

#[cfg(feature = "rest")]
pub use auth::RestAuth;
#[cfg(feature = "rest")]
pub use backend::RestClient;
