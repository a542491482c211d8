use super::super::action::{Action, OfferDetailsAction, OffersAction, Phase, ReviewsAction};
use super::{Runtime, share_all};
use crate::domain::{NewReview, OfferId};

pub async fn load_offers(runtime: &Runtime) -> Action {
    let result = runtime.api.fetch_offers().await.map(share_all);
    Action::Offers(OffersAction::FetchList(Phase::settle(result)))
}

pub async fn fetch_offer(runtime: &Runtime, offer_id: OfferId) -> Action {
    let result = runtime.api.fetch_offer(&offer_id).await;
    Action::OfferDetails(OfferDetailsAction::FetchById {
        offer_id,
        phase: Phase::settle(result),
    })
}

pub async fn fetch_nearby(runtime: &Runtime, offer_id: OfferId) -> Action {
    let result = runtime.api.fetch_nearby(&offer_id).await.map(share_all);
    Action::Offers(OffersAction::FetchNearby {
        offer_id,
        phase: Phase::settle(result),
    })
}

pub async fn fetch_reviews(runtime: &Runtime, offer_id: OfferId) -> Action {
    let result = runtime.api.fetch_reviews(&offer_id).await;
    Action::Reviews(ReviewsAction::FetchList {
        offer_id,
        phase: Phase::settle(result),
    })
}

pub async fn post_review(runtime: &Runtime, offer_id: OfferId, review: NewReview) -> Action {
    let result = runtime.api.post_review(&offer_id, &review).await;
    Action::Reviews(ReviewsAction::PostNew {
        offer_id,
        phase: Phase::settle(result),
    })
}
