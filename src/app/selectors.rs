//! Derived views over the state tree.

use std::sync::Arc;

use super::state::{AppState, OffersState};
use crate::domain::{AuthorizationStatus, Review, SharedOffer, SortKey};

/// Nearby offers shown next to an offer.
pub const NEARBY_LIMIT: usize = 3;
/// Reviews shown on the offer page.
pub const MAX_REVIEWS_SHOWN: usize = 10;

/// Offers in `city`, ordered by `sort`. Orderings are stable; the source
/// slice is left as it is.
pub fn visible_offers(offers: &[SharedOffer], city: &str, sort: SortKey) -> Vec<SharedOffer> {
    let mut visible: Vec<SharedOffer> = offers
        .iter()
        .filter(|offer| offer.city.name == city)
        .cloned()
        .collect();

    match sort {
        SortKey::Popular => {}
        SortKey::PriceLowToHigh => visible.sort_by_key(|offer| offer.price),
        SortKey::PriceHighToLow => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::TopRatedFirst => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    visible
}

pub fn select_visible_offers(state: &AppState) -> Vec<SharedOffer> {
    visible_offers(&state.offers.list, &state.filters.city, state.filters.sort)
}

/// Memoized `select_visible_offers`: recomputed only when the offers slice,
/// the city or the sort key changes.
#[derive(Debug, Default)]
pub struct VisibleOffers {
    inputs: Option<(Arc<OffersState>, String, SortKey)>,
    cached: Arc<[SharedOffer]>,
    recomputations: usize,
}

impl VisibleOffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, state: &AppState) -> Arc<[SharedOffer]> {
        let unchanged = self.inputs.as_ref().is_some_and(|(offers, city, sort)| {
            Arc::ptr_eq(offers, &state.offers)
                && *city == state.filters.city
                && *sort == state.filters.sort
        });
        if !unchanged {
            self.cached = select_visible_offers(state).into();
            self.inputs = Some((
                Arc::clone(&state.offers),
                state.filters.city.clone(),
                state.filters.sort,
            ));
            self.recomputations += 1;
        }
        Arc::clone(&self.cached)
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

pub fn is_authorized(state: &AppState) -> bool {
    state.auth.status == AuthorizationStatus::Auth
}

/// Headline above the offers list, e.g. "3 places to stay in Amsterdam".
pub fn places_found(count: usize, city: &str) -> String {
    format!("{count} places to stay in {city}")
}

pub fn nearby_preview(state: &AppState) -> &[SharedOffer] {
    let nearby = &state.offers.nearby;
    &nearby[..nearby.len().min(NEARBY_LIMIT)]
}

pub fn visible_reviews(state: &AppState) -> &[Review] {
    let reviews = &state.reviews.list;
    &reviews[..reviews.len().min(MAX_REVIEWS_SHOWN)]
}

/// Favorites grouped by city name, cities in first-seen order.
pub fn favorites_by_city(state: &AppState) -> Vec<(String, Vec<SharedOffer>)> {
    let mut groups: Vec<(String, Vec<SharedOffer>)> = Vec::new();
    for offer in state.favorites.list.iter().flatten() {
        match groups.iter_mut().find(|(city, _)| *city == offer.city.name) {
            Some((_, offers)) => offers.push(Arc::clone(offer)),
            None => groups.push((offer.city.name.clone(), vec![Arc::clone(offer)])),
        }
    }
    groups
}
