// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

use crate::backend::BackendError;
use crate::records::ValidationError;

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair was rejected.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// Operation requires a signed-in user.
    #[error("not signed in")]
    NotSignedIn,

    /// Auth API answered with an error.
    #[error("auth rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-provided message
        message: String,
    },

    /// Form validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Profile lookup failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Network/request error
    #[cfg(feature = "rest")]
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Malformed auth response.
    #[error("unexpected auth response: {0}")]
    Malformed(String),
}
