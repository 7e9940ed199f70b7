// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sign-up and sign-in form checks.

use crate::records::ValidationError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Fields of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// All fields required, passwords must match, minimum length applies.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            (self.full_name.trim(), "full_name"),
            (self.email.trim(), "email"),
            (self.password.as_str(), "password"),
            (self.confirm_password.as_str(), "confirm_password"),
        ];
        if let Some((_, name)) = fields.iter().find(|(value, _)| value.is_empty()) {
            return Err(ValidationError::MissingField(*name));
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(())
    }
}

/// Email and password are both required to sign in.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    Ok(())
}
