//! Session operations. Besides settling the action these keep the persisted
//! token in step with the backend session.

use super::super::action::{Action, AuthAction, Phase};
use super::Runtime;
use crate::domain::Credentials;

pub async fn check_auth(runtime: &Runtime) -> Action {
    let result = runtime.api.check_auth().await;
    if let Err(err) = &result
        && err.is_unauthorized()
    {
        purge_token(runtime);
    }
    Action::Auth(AuthAction::CheckAuth(Phase::settle(result)))
}

pub async fn login(runtime: &Runtime, credentials: Credentials) -> Action {
    let result = runtime.api.login(&credentials).await;
    if let Ok(user) = &result
        && let Err(err) = runtime.tokens.save(&user.token)
    {
        log::warn!("Failed to persist auth token: {}", err);
    }
    Action::Auth(AuthAction::Login(Phase::settle(result)))
}

pub async fn logout(runtime: &Runtime) -> Action {
    let result = runtime.api.logout().await;
    if result.is_ok() {
        purge_token(runtime);
    }
    Action::Auth(AuthAction::Logout(Phase::settle(result)))
}

fn purge_token(runtime: &Runtime) {
    if let Err(err) = runtime.tokens.purge() {
        log::warn!("Failed to remove auth token: {}", err);
    }
}
