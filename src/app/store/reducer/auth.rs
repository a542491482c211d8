use std::sync::Arc;

use super::super::super::state::AuthState;
use super::super::action::{Action, AuthAction, Phase};
use crate::domain::AuthorizationStatus;

/// Each operation owns its loading flag so overlapping requests do not
/// clobber each other.
pub fn reduce(auth: &mut Arc<AuthState>, action: &Action) {
    let Action::Auth(action) = action else {
        return;
    };
    let auth = Arc::make_mut(auth);
    match action {
        AuthAction::CheckAuth(phase) => match phase {
            Phase::Pending => auth.authorization_loading = true,
            Phase::Fulfilled(user) => {
                auth.status = AuthorizationStatus::Auth;
                auth.user = Some(user.clone());
                auth.authorization_loading = false;
            }
            Phase::Rejected(_) => {
                auth.status = AuthorizationStatus::NoAuth;
                auth.user = None;
                auth.authorization_loading = false;
            }
        },
        AuthAction::Login(phase) => match phase {
            Phase::Pending => auth.login_loading = true,
            Phase::Fulfilled(user) => {
                auth.status = AuthorizationStatus::Auth;
                auth.user = Some(user.clone());
                auth.login_loading = false;
            }
            Phase::Rejected(_) => auth.login_loading = false,
        },
        AuthAction::Logout(phase) => match phase {
            Phase::Pending => auth.logout_loading = true,
            Phase::Fulfilled(()) => {
                auth.status = AuthorizationStatus::NoAuth;
                auth.user = None;
                auth.logout_loading = false;
            }
            // The session may or may not still be valid on the server.
            Phase::Rejected(_) => {
                auth.status = AuthorizationStatus::Unknown;
                auth.user = None;
                auth.logout_loading = false;
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::fixtures::user;
    use crate::domain::ApiError;

    fn apply(auth: &mut Arc<AuthState>, action: AuthAction) {
        reduce(auth, &Action::Auth(action));
    }

    #[test]
    fn check_auth_success_and_failure() {
        let mut auth = Arc::new(AuthState::default());
        apply(&mut auth, AuthAction::CheckAuth(Phase::Pending));
        assert!(auth.authorization_loading);
        assert_eq!(auth.status, AuthorizationStatus::Unknown);

        apply(&mut auth, AuthAction::CheckAuth(Phase::Fulfilled(user())));
        assert_eq!(auth.status, AuthorizationStatus::Auth);
        assert_eq!(auth.user, Some(user()));
        assert!(!auth.authorization_loading);

        apply(
            &mut auth,
            AuthAction::CheckAuth(Phase::Rejected(ApiError::Unauthorized)),
        );
        assert_eq!(auth.status, AuthorizationStatus::NoAuth);
        assert!(auth.user.is_none());
    }

    #[test]
    fn login_does_not_clobber_inflight_logout() {
        let mut auth = Arc::new(AuthState::default());
        apply(&mut auth, AuthAction::Logout(Phase::Pending));
        apply(&mut auth, AuthAction::Login(Phase::Pending));
        apply(
            &mut auth,
            AuthAction::Login(Phase::Rejected(ApiError::Validation {
                status: 400,
                message: "bad email".into(),
            })),
        );
        assert!(!auth.login_loading);
        assert!(auth.logout_loading);
    }

    #[test]
    fn rejected_login_keeps_status() {
        let mut auth = Arc::new(AuthState {
            status: AuthorizationStatus::NoAuth,
            ..Default::default()
        });
        apply(&mut auth, AuthAction::Login(Phase::Pending));
        apply(
            &mut auth,
            AuthAction::Login(Phase::Rejected(ApiError::Network("offline".into()))),
        );
        assert_eq!(auth.status, AuthorizationStatus::NoAuth);
        assert!(!auth.login_loading);
    }

    #[test]
    fn logout_outcomes() {
        let mut auth = Arc::new(AuthState {
            status: AuthorizationStatus::Auth,
            user: Some(user()),
            ..Default::default()
        });
        apply(&mut auth, AuthAction::Logout(Phase::Fulfilled(())));
        assert_eq!(auth.status, AuthorizationStatus::NoAuth);
        assert!(auth.user.is_none());

        let mut auth = Arc::new(AuthState {
            status: AuthorizationStatus::Auth,
            user: Some(user()),
            ..Default::default()
        });
        apply(&mut auth, AuthAction::Logout(Phase::Pending));
        apply(
            &mut auth,
            AuthAction::Logout(Phase::Rejected(ApiError::Server { status: 500 })),
        );
        assert_eq!(auth.status, AuthorizationStatus::Unknown);
        assert!(auth.user.is_none());
        assert!(!auth.logout_loading);
    }
}
