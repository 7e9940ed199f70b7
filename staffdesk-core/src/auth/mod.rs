// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authentication/Session Provider
//!
//! Supplies the current identity and profile and the sign-up/sign-in/
//! sign-out lifecycle. Session lifecycle is delegated to the hosted auth API;
//! this module only keeps the resulting session in a [`SessionStore`].

mod error;
#[cfg(feature = "rest")]
mod rest;
mod session;
pub mod validation;

use async_trait::async_trait;

use crate::records::Profile;

pub use error::AuthError;
#[cfg(feature = "rest")]
pub use rest::RestAuth;
pub use session::{AuthUser, Session, SessionStore};
pub use validation::{validate_sign_in, RegistrationForm, MIN_PASSWORD_LENGTH};

/// Identity and session lifecycle.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<AuthUser>;

    /// Identifier of the signed-in user, if any.
    fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|u| u.id)
    }

    /// Profile of the signed-in user. `Ok(None)` when no profile row exists.
    async fn profile(&self) -> Result<Option<Profile>, AuthError>;

    /// Creates an account. Does not sign in.
    async fn sign_up(&self, email: &str, password: &str, full_name: &str)
        -> Result<AuthUser, AuthError>;

    /// Signs in with email and password and stores the session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Ends the session. The local session is always cleared.
    async fn sign_out(&self) -> Result<(), AuthError>;
}
