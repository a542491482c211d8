pub mod auth;
pub mod favorites;
pub mod offers;


use std::sync::Arc;

use super::action::Action;
use super::command::Command;
use crate::domain::{Offer, SharedOffer};
use crate::infra::api::OffersApi;
use crate::infra::token::TokenStorage;

/// Executes commands against the backend and turns each outcome into the
/// action that settles it.
#[derive(Clone)]
pub struct Runtime {
    pub(crate) api: Arc<dyn OffersApi>,
    pub(crate) tokens: TokenStorage,
}

impl Runtime {
    pub fn new(api: Arc<dyn OffersApi>, tokens: TokenStorage) -> Self {
        Self { api, tokens }
    }

    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    /// Performs one round trip. Always returns the fulfilled or rejected
    /// action; never the pending one.
    pub async fn execute(&self, command: Command) -> Action {
        let name = command.name();
        log::debug!("{} started", name);
        let action = match command {
            Command::LoadOffers => offers::load_offers(self).await,
            Command::FetchOffer { offer_id } => offers::fetch_offer(self, offer_id).await,
            Command::FetchNearby { offer_id } => offers::fetch_nearby(self, offer_id).await,
            Command::FetchReviews { offer_id } => offers::fetch_reviews(self, offer_id).await,
            Command::PostReview { offer_id, review } => {
                offers::post_review(self, offer_id, review).await
            }
            Command::CheckAuth => auth::check_auth(self).await,
            Command::Login { credentials } => auth::login(self, credentials).await,
            Command::Logout => auth::logout(self).await,
            Command::FetchFavorites => favorites::fetch_favorites(self).await,
            Command::SetFavoriteStatus { offer_id, status } => {
                favorites::set_favorite_status(self, offer_id, status).await
            }
        };
        match action.error() {
            Some(err) => log::warn!("{} failed: {}", name, err),
            None => log::debug!("{} fulfilled", name),
        }
        action
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime").finish_non_exhaustive()
    }
}

pub(crate) fn share_all(offers: Vec<Offer>) -> Vec<SharedOffer> {
    offers.into_iter().map(Arc::new).collect()
}
