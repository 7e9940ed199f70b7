// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backend error types.

use thiserror::Error;

/// Errors reported by a [`DataClient`](super::DataClient).
#[derive(Debug, Error)]
pub enum BackendError {
    /// Server answered with a non-success status.
    #[error("HTTP error {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or the raw body
        message: String,
    },

    /// Network/request error
    #[cfg(feature = "rest")]
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Row could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// Operation refused by the backend (injected by the memory backend).
    #[error("{operation} on {table} rejected: {message}")]
    Rejected {
        /// Table name
        table: String,
        /// Operation name
        operation: String,
        /// Reason
        message: String,
    },
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

/// Result type for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Status {
            status: 401,
            message: "JWT expired".into(),
        };
        assert_eq!(err.to_string(), "HTTP error 401: JWT expired");

        let err = BackendError::Rejected {
            table: "files".into(),
            operation: "update".into(),
            message: "offline".into(),
        };
        assert_eq!(err.to_string(), "update on files rejected: offline");
    }

    #[test]
    fn test_backend_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: BackendError = json_err.into();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}
