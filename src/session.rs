// SPDX-License-Identifier: MPL-2.0
//! Session state machine.
//!
//! The session is the single owner of the authenticated [`Identity`].
//! It starts in `Loading` while the startup probe is in flight; no
//! route-guarded screen renders until the probe resolves. Transitions:
//!
//! ```text
//! Loading ──probe ok──────────▶ Authenticated(identity)
//! Loading ──probe failed──────▶ Unauthenticated
//! Unauthenticated ──login ok──▶ Authenticated(identity)
//! Authenticated ──logout──────▶ Unauthenticated   (always, even on error)
//! ```
//!
//! There is no retry logic: every operation is single-shot. Login and
//! register surface their failure to the caller; the probe and logout
//! resolve silently to `Unauthenticated`.

use crate::api::models::Identity;
use crate::error::ApiError;

/// Authentication state, distinct from both "logged in" and "logged out"
/// while the startup probe is pending.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(Identity),
    Unauthenticated,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// A fresh session, pending the startup probe.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(Identity::is_admin)
    }

    /// Resolves the startup probe. Failure is not an error state: it is
    /// the expected signal for "no session".
    pub fn resolve_probe(&mut self, result: Result<Identity, ApiError>) {
        self.state = match result {
            Ok(identity) => SessionState::Authenticated(identity),
            Err(_) => SessionState::Unauthenticated,
        };
    }

    /// Establishes a session from a successful login or register
    /// response. Registration is auto-login: the response body is the
    /// identity.
    pub fn establish(&mut self, identity: Identity) {
        self.state = SessionState::Authenticated(identity);
    }

    /// Clears the session locally. Called for every logout, before the
    /// network outcome is known: the client must never remain visually
    /// logged in after the user asked to leave.
    pub fn clear(&mut self) {
        self.state = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Role;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "u1".into(),
            name: "Asha".into(),
            email: "a@b.com".into(),
            role,
            token: None,
        }
    }

    #[test]
    fn new_session_is_loading() {
        let session = Session::new();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
    }

    #[test]
    fn probe_success_authenticates_with_response_body() {
        let mut session = Session::new();
        let who = identity(Role::User);
        session.resolve_probe(Ok(who.clone()));

        assert_eq!(session.identity(), Some(&who));
        assert!(!session.is_loading());
    }

    #[test]
    fn probe_failure_resolves_to_unauthenticated() {
        let mut session = Session::new();
        session.resolve_probe(Err(ApiError::Transport("refused".into())));

        assert_eq!(*session.state(), SessionState::Unauthenticated);
        assert!(!session.is_loading());
    }

    #[test]
    fn login_establishes_identity() {
        let mut session = Session::new();
        session.resolve_probe(Err(ApiError::Status {
            code: 401,
            message: None,
        }));

        session.establish(identity(Role::Admin));
        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }

    #[test]
    fn clear_always_results_in_unauthenticated() {
        let mut session = Session::new();
        session.establish(identity(Role::User));
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(*session.state(), SessionState::Unauthenticated);
        assert!(session.identity().is_none());
    }

    #[test]
    fn plain_user_is_not_admin() {
        let mut session = Session::new();
        session.establish(identity(Role::User));
        assert!(!session.is_admin());
    }
}
