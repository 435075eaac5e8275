//! Pure validation of the credential draft.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::auth::{AuthMode, CredentialDraft, Field};

/// Field-level validation errors. `None` means the field is valid.
///
/// Recomputed wholesale on every submit attempt; never partially stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    /// True iff every field is valid.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }

    /// The error message for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::ConfirmPassword => self.confirm_password.as_deref(),
        }
    }

    /// Drop the error for a single field, leaving the rest untouched.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Password => self.password = None,
            Field::ConfirmPassword => self.confirm_password = None,
        }
    }
}

/// Validate a credential draft against the rules for the given mode.
///
/// Every rule is evaluated independently; all applicable errors are
/// reported together rather than short-circuiting on the first failure.
/// Sign-in mode never reports `name` or `confirm_password` errors.
pub fn validate(draft: &CredentialDraft, mode: AuthMode) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if mode == AuthMode::SignUp {
        if draft.name.trim().is_empty() {
            errors.name = Some("Name is required".to_owned());
        } else if draft.name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters".to_owned());
        }
    }

    if draft.email.trim().is_empty() {
        errors.email = Some("Email is required".to_owned());
    } else if !looks_like_email(&draft.email) {
        errors.email = Some("Please enter a valid email".to_owned());
    }

    if draft.password.is_empty() {
        errors.password = Some("Password is required".to_owned());
    } else if draft.password.chars().count() < 6 {
        errors.password = Some("Password must be at least 6 characters".to_owned());
    }

    if mode == AuthMode::SignUp {
        if draft.confirm_password.is_empty() {
            errors.confirm_password = Some("Please confirm your password".to_owned());
        } else if draft.confirm_password != draft.password {
            errors.confirm_password = Some("Passwords do not match".to_owned());
        }
    }

    errors
}

/// Permissive mailbox shape: a non-empty local part, an `@`, and a `.`
/// with something after it in the domain part. Deliberately not RFC-exact.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.trim().is_empty() {
        return false;
    }
    domain
        .rfind('.')
        .is_some_and(|dot| dot + 1 < domain.len())
}
