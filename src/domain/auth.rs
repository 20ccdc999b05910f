//! Sign-in and sign-up forms.
//!
//! Passwords stay wrapped in [`SecretString`] from deserialization until the
//! upstream adapter builds the request body.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::ValidationError;

/// Minimum password length accepted at sign-up, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-in form as submitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub email: String,
    pub password: Option<SecretString>,
}

/// Sign-up form as submitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: Option<SecretString>,
    pub confirm_password: Option<SecretString>,
}

/// Validated body for `POST /api/v1/auth/sign-in`.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Validated body for `POST /api/v1/auth/sign-up`.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignInForm {
    /// Checks that both fields are present. Format is left to the upstream.
    pub fn validate(self) -> Result<Credentials, ValidationError> {
        let email = required_email(&self.email)?;
        let password = required_password(self.password)?;
        Ok(Credentials { email, password })
    }
}

impl SignUpForm {
    /// Validates the form, returning the first failing field.
    pub fn validate(self) -> Result<Registration, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let email = required_email(&self.email)?;
        if !is_valid_email(&email) {
            return Err(ValidationError::invalid_format(
                "email",
                "please enter a valid email address",
            ));
        }

        let password = required_password(self.password)?;
        if password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::invalid_format(
                "password",
                format!("must be at least {} characters long", MIN_PASSWORD_LEN),
            ));
        }

        let confirmed = self
            .confirm_password
            .map(|confirm| confirm.expose_secret() == password.expose_secret())
            .unwrap_or(false);
        if !confirmed {
            return Err(ValidationError::invalid_format(
                "confirmPassword",
                "passwords do not match",
            ));
        }

        Ok(Registration {
            name: name.to_string(),
            email,
            password,
        })
    }
}

fn required_email(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    Ok(trimmed.to_string())
}

fn required_password(value: Option<SecretString>) -> Result<SecretString, ValidationError> {
    value
        .filter(|password| !password.expose_secret().is_empty())
        .ok_or_else(|| ValidationError::empty_field("password"))
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
