pub mod auth;
pub mod favorites;
pub mod filters;
pub mod offer_details;
pub mod offers;
pub mod reviews;

use super::super::state::AppState;
use super::action::Action;

/// Applies `action` to every domain. Each domain reducer sees only its own
/// slice; cross-domain effects are read from the action payload.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    filters::reduce(&mut next.filters, action);
    offers::reduce(&mut next.offers, action);
    offer_details::reduce(&mut next.offer_details, action);
    reviews::reduce(&mut next.reviews, action);
    auth::reduce(&mut next.auth, action);
    favorites::reduce(&mut next.favorites, action);
    next
}
