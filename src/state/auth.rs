//! Authentication form state machine.
//!
//! All transitions are methods on [`AuthFormState`], so the machine is
//! testable without a browser. The async submission flow ([`submit`]) is
//! the only part that needs one and is gated behind `hydrate`.
//!
//! STATE MACHINE
//! =============
//! Idle -(submit, invalid)-> Idle (field errors shown)
//! Idle -(submit, valid)----> Submitting
//! Submitting -(success)----> Succeeded (terminal until the redirect runs)
//! Submitting -(failure)----> Failed
//! Failed -(edit any field)-> Idle
//! Failed -(submit, valid)--> Submitting
//! Mode toggle from any state -> Idle with the draft cleared.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthPayload;
use crate::state::validate::{self, FieldErrors};

/// Whether the visitor intends to sign in to an existing account or
/// create a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Lifecycle of a submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Typed selector for a credential form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// The in-progress, not-yet-submitted credential form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CredentialDraft {
    /// Current value of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

/// Everything the auth page renders: mode, draft, submission status, the
/// banner error, and per-field validation errors.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub draft: CredentialDraft,
    pub status: SubmissionStatus,
    pub error: String,
    pub field_errors: FieldErrors,
}

impl AuthFormState {
    /// Switch between sign-in and sign-up.
    ///
    /// Always resets the draft and errors and returns to Idle, even when
    /// `mode` is already current. Toggle semantics: deliberately not
    /// idempotent on the draft.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.draft = CredentialDraft::default();
        self.status = SubmissionStatus::Idle;
        self.error.clear();
        self.field_errors = FieldErrors::default();
    }

    /// Record a keystroke: write the field, drop its stale validation
    /// error, and clear the banner. An edit after a failed attempt brings
    /// the form back to Idle.
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Password => self.draft.password = value,
            Field::ConfirmPassword => self.draft.confirm_password = value,
        }
        self.field_errors.clear(field);
        self.error.clear();
        if self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Start a submission attempt.
    ///
    /// Returns the request payload to send, or `None` when nothing should
    /// be sent: a submission is already in flight (at most one at a time),
    /// the form already succeeded, or validation failed. On validation
    /// failure the field errors are stored and the status is unchanged.
    pub fn begin_submit(&mut self) -> Option<AuthPayload> {
        if matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        ) {
            return None;
        }

        let errors = validate::validate(&self.draft, self.mode);
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }

        self.field_errors = FieldErrors::default();
        self.error.clear();
        self.status = SubmissionStatus::Submitting;
        Some(AuthPayload::from_draft(&self.draft, self.mode))
    }

    /// The in-flight request succeeded and the session was persisted.
    pub fn apply_success(&mut self) {
        self.status = SubmissionStatus::Succeeded;
        self.error.clear();
    }

    /// The in-flight request failed; keep the draft so the visitor can
    /// correct and resubmit.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed;
        self.error = message.into();
    }
}

/// Delay between showing the success banner and redirecting, so the
/// acknowledgment is visible before the page changes.
pub const REDIRECT_DELAY_MS: u64 = 1500;

/// Drive a full submission attempt: validate, call the identity service,
/// persist the session, then navigate after a short success delay.
///
/// Every state write after an await goes through `try_update`, so a
/// response that lands after the auth page was torn down is discarded
/// instead of panicking on a disposed signal. The redirect is skipped if
/// the form was reset while the delay timer ran.
#[cfg(feature = "hydrate")]
pub fn submit(
    auth: leptos::prelude::RwSignal<AuthFormState>,
    store: crate::session::store::StoreHandle,
    navigate: impl Fn() + 'static,
) {
    use leptos::prelude::{GetUntracked, Update};

    use crate::net::api;

    let Some(payload) = auth.try_update(AuthFormState::begin_submit).flatten() else {
        return;
    };

    leptos::task::spawn_local(async move {
        match api::authenticate(&payload).await {
            Ok(session) => {
                if store.set(&session).is_err() {
                    leptos::logging::warn!("failed to persist session");
                    // No partial session may survive a failed write.
                    store.clear();
                    let _ = auth.try_update(|s| s.apply_failure(api::GENERIC_ERROR));
                    return;
                }

                let _ = auth.try_update(AuthFormState::apply_success);

                gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS))
                    .await;

                let still_succeeded = auth
                    .try_get_untracked()
                    .is_some_and(|s| s.status == SubmissionStatus::Succeeded);
                if still_succeeded {
                    navigate();
                }
            }
            Err(err) => {
                leptos::logging::warn!("auth request failed: {err:?}");
                let _ = auth.try_update(|s| s.apply_failure(err.message()));
            }
        }
    });
}
