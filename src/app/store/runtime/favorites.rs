use std::sync::Arc;

use super::super::action::{Action, FavoritesAction, Phase};
use super::{Runtime, share_all};
use crate::domain::{FavoriteStatus, OfferId};

pub async fn fetch_favorites(runtime: &Runtime) -> Action {
    let result = runtime.api.fetch_favorites().await.map(share_all);
    Action::Favorites(FavoritesAction::FetchList(Phase::settle(result)))
}

pub async fn set_favorite_status(
    runtime: &Runtime,
    offer_id: OfferId,
    status: FavoriteStatus,
) -> Action {
    let result = runtime
        .api
        .set_favorite_status(&offer_id, status)
        .await
        .map(Arc::new);
    Action::Favorites(FavoritesAction::SetStatus {
        offer_id,
        status,
        phase: Phase::settle(result),
    })
}
