//! Route-level access control for protected views.
//!
//! The guard never propagates storage problems past its boundary: a
//! partial or unparsable session reads as "no session" and ends in a
//! redirect, exactly like an anonymous visit.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::store::{Session, SessionStore};

/// Outcome of the pre-render session check on a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// A valid session exists; render the view.
    Allow(Session),
    /// No usable session; send the visitor to the auth page.
    RedirectToAuth,
}

/// Read the persisted session, if any.
pub fn current_session(store: &dyn SessionStore) -> Option<Session> {
    store.get()
}

/// Decide whether a protected view may render. Called on mount; the page
/// performs the navigation when the decision is [`GuardDecision::RedirectToAuth`].
pub fn require_session(store: &dyn SessionStore) -> GuardDecision {
    match current_session(store) {
        Some(session) => GuardDecision::Allow(session),
        None => GuardDecision::RedirectToAuth,
    }
}

/// Tear down the session. A no-op besides the caller's redirect when no
/// session is present.
pub fn logout(store: &dyn SessionStore) {
    store.clear();
}
