use std::sync::Arc;

use super::super::super::state::OffersState;
use super::super::action::{Action, FavoritesAction, OffersAction, Phase};
use crate::domain::SharedOffer;

pub fn reduce(offers: &mut Arc<OffersState>, action: &Action) {
    match action {
        Action::Offers(OffersAction::FetchList(phase)) => {
            let offers = Arc::make_mut(offers);
            match phase {
                Phase::Pending => offers.list_loading = true,
                Phase::Fulfilled(list) => {
                    offers.list = list.clone();
                    offers.list_loading = false;
                }
                // Previous list stays visible.
                Phase::Rejected(_) => offers.list_loading = false,
            }
        }
        Action::Offers(OffersAction::FetchNearby { phase, .. }) => {
            let offers = Arc::make_mut(offers);
            match phase {
                Phase::Pending => {
                    offers.nearby_loading = true;
                    offers.nearby = Vec::new();
                }
                Phase::Fulfilled(nearby) => {
                    offers.nearby = nearby.clone();
                    offers.nearby_loading = false;
                }
                Phase::Rejected(_) => {
                    offers.nearby = Vec::new();
                    offers.nearby_loading = false;
                }
            }
        }
        Action::Favorites(FavoritesAction::SetStatus {
            offer_id,
            phase: Phase::Fulfilled(updated),
            ..
        }) => splice_updated_offer(offers, offer_id, updated),
        _ => {}
    }
}

/// Replaces the offer with `offer_id` in both lists. The slice is only
/// copied when one of the lists actually contains the offer.
fn splice_updated_offer(offers: &mut Arc<OffersState>, offer_id: &str, updated: &SharedOffer) {
    let list_index = offers.list.iter().position(|o| o.id == offer_id);
    let nearby_index = offers.nearby.iter().position(|o| o.id == offer_id);
    if list_index.is_none() && nearby_index.is_none() {
        return;
    }

    let offers = Arc::make_mut(offers);
    if let Some(index) = list_index {
        offers.list[index] = Arc::clone(updated);
    }
    if let Some(index) = nearby_index {
        offers.nearby[index] = Arc::clone(updated);
    }
}
