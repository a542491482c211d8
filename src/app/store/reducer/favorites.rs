use std::sync::Arc;

use super::super::super::state::FavoritesState;
use super::super::action::{Action, AuthAction, FavoritesAction, Phase};
use crate::domain::SharedOffer;

pub fn reduce(favorites: &mut Arc<FavoritesState>, action: &Action) {
    match action {
        Action::Favorites(FavoritesAction::FetchList(phase)) => {
            let favorites = Arc::make_mut(favorites);
            match phase {
                Phase::Pending => favorites.list_loading = true,
                Phase::Fulfilled(list) => {
                    favorites.list = Some(list.clone());
                    favorites.list_loading = false;
                }
                Phase::Rejected(_) => favorites.list_loading = false,
            }
        }
        Action::Favorites(FavoritesAction::SetStatus {
            offer_id, phase, ..
        }) => {
            let favorites = Arc::make_mut(favorites);
            match phase {
                Phase::Pending => favorites.set_status_loading = true,
                Phase::Fulfilled(updated) => {
                    favorites.set_status_loading = false;
                    if let Some(list) = favorites.list.as_mut() {
                        apply_status(list, offer_id, updated);
                    }
                }
                Phase::Rejected(_) => favorites.set_status_loading = false,
            }
        }
        // A different session sees a different favorites list.
        Action::Auth(AuthAction::Login(Phase::Fulfilled(_)))
        | Action::Auth(AuthAction::Logout(Phase::Fulfilled(()))) => {
            if favorites.list.is_some() {
                Arc::make_mut(favorites).list = None;
            }
        }
        _ => {}
    }
}

fn apply_status(list: &mut Vec<SharedOffer>, offer_id: &str, updated: &SharedOffer) {
    let index = list.iter().position(|o| o.id == offer_id);
    match (updated.is_favorite, index) {
        (true, Some(index)) => list[index] = Arc::clone(updated),
        (true, None) => list.push(Arc::clone(updated)),
        (false, Some(index)) => {
            list.remove(index);
        }
        (false, None) => {}
    }
}
