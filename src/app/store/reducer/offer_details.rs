use std::sync::Arc;

use super::super::super::state::OfferDetailsState;
use super::super::action::{Action, FavoritesAction, OfferDetailsAction, Phase};

pub fn reduce(details: &mut Arc<OfferDetailsState>, action: &Action) {
    match action {
        Action::OfferDetails(OfferDetailsAction::FetchById { phase, .. }) => {
            let details = Arc::make_mut(details);
            match phase {
                Phase::Pending => {
                    details.current = None;
                    details.current_loading = true;
                }
                Phase::Fulfilled(offer) => {
                    details.current = Some(offer.clone());
                    details.current_loading = false;
                }
                Phase::Rejected(_) => {
                    details.current = None;
                    details.current_loading = false;
                }
            }
        }
        Action::Favorites(FavoritesAction::SetStatus {
            offer_id,
            phase: Phase::Fulfilled(updated),
            ..
        }) => {
            let is_current = details
                .current
                .as_ref()
                .is_some_and(|current| current.id == *offer_id);
            if !is_current {
                return;
            }
            if let Some(current) = Arc::make_mut(details).current.as_mut() {
                current.is_favorite = updated.is_favorite;
            }
        }
        _ => {}
    }
}
