// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the route guard.
//!
//! [`resolve`] is the only way the application changes screens: it is a
//! pure predicate over the requested screen and the session state, with
//! no side effects beyond the returned destination.

use crate::session::{Session, SessionState};

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Catalog,
    AddSweet,
}

impl Screen {
    /// Screens that require a session.
    pub fn is_protected(self) -> bool {
        matches!(self, Screen::Catalog | Screen::AddSweet)
    }

    /// Screens that additionally require the admin role.
    pub fn requires_admin(self) -> bool {
        matches!(self, Screen::AddSweet)
    }

    /// Screens that only make sense without a session.
    pub fn is_unauthenticated_only(self) -> bool {
        matches!(self, Screen::Login | Screen::Register)
    }
}

/// Resolves a navigation request against the current session:
///
/// - no session: protected screens redirect to [`Screen::Login`];
/// - session present: login/register redirect to the catalog, and
///   admin-only screens redirect non-admins to the catalog;
/// - while the startup probe is pending the request is left alone —
///   the view renders nothing but the loading indicator anyway.
pub fn resolve(target: Screen, session: &Session) -> Screen {
    match session.state() {
        SessionState::Loading => target,
        SessionState::Unauthenticated => {
            if target.is_protected() {
                Screen::Login
            } else {
                target
            }
        }
        SessionState::Authenticated(identity) => {
            if target.is_unauthenticated_only() {
                Screen::Catalog
            } else if target.requires_admin() && !identity.is_admin() {
                Screen::Catalog
            } else {
                target
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Identity, Role};

    fn session_with(role: Role) -> Session {
        let mut session = Session::new();
        session.establish(Identity {
            id: "u1".into(),
            name: "Asha".into(),
            email: "a@b.com".into(),
            role,
            token: None,
        });
        session
    }

    fn unauthenticated() -> Session {
        let mut session = Session::new();
        session.clear();
        session
    }

    #[test]
    fn protected_screens_redirect_to_login_without_session() {
        let session = unauthenticated();
        assert_eq!(resolve(Screen::Catalog, &session), Screen::Login);
        assert_eq!(resolve(Screen::AddSweet, &session), Screen::Login);
    }

    #[test]
    fn auth_screens_stay_reachable_without_session() {
        let session = unauthenticated();
        assert_eq!(resolve(Screen::Login, &session), Screen::Login);
        assert_eq!(resolve(Screen::Register, &session), Screen::Register);
    }

    #[test]
    fn auth_screens_redirect_to_catalog_with_session() {
        let session = session_with(Role::User);
        assert_eq!(resolve(Screen::Login, &session), Screen::Catalog);
        assert_eq!(resolve(Screen::Register, &session), Screen::Catalog);
    }

    #[test]
    fn admin_screen_redirects_plain_users_to_catalog() {
        let session = session_with(Role::User);
        assert_eq!(resolve(Screen::AddSweet, &session), Screen::Catalog);
    }

    #[test]
    fn admin_reaches_admin_screen() {
        let session = session_with(Role::Admin);
        assert_eq!(resolve(Screen::AddSweet, &session), Screen::AddSweet);
    }

    #[test]
    fn pending_probe_leaves_request_untouched() {
        let session = Session::new();
        assert_eq!(resolve(Screen::Catalog, &session), Screen::Catalog);
    }
}
