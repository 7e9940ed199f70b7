// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the Staffdesk API layer.

use thiserror::Error;

use crate::auth::AuthError;
use crate::backend::BackendError;
use crate::records::ValidationError;

/// Unified error type for Staffdesk operations.
#[derive(Error, Debug)]
pub enum StaffdeskError {
    /// Draft validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backend call failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Authentication failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Operation needs a signed-in user.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Caller passed an unusable argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for Staffdesk operations.
pub type StaffdeskResult<T> = Result<T, StaffdeskError>;

/// Rejects empty or whitespace-only user identifiers.
pub(crate) fn require_user_id(user_id: &str) -> StaffdeskResult<()> {
    if user_id.trim().is_empty() {
        return Err(StaffdeskError::InvalidInput(
            "user id must not be empty".into(),
        ));
    }
    Ok(())
}
