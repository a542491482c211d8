use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    ApiError, Credentials, FavoriteStatus, NewReview, Offer, OfferDetails, Review, User,
    UserPreview,
};
use crate::infra::api::OffersApi;

use super::fixtures;

fn not_found() -> ApiError {
    ApiError::Validation {
        status: 404,
        message: "Not found".into(),
    }
}

/// In-memory backend with canned responses and a call log.
pub struct FakeApi {
    pub offers: Mutex<Result<Vec<Offer>, ApiError>>,
    pub offer: Mutex<Result<OfferDetails, ApiError>>,
    pub nearby: Mutex<Result<Vec<Offer>, ApiError>>,
    pub reviews: Mutex<Result<Vec<Review>, ApiError>>,
    pub post_review_error: Mutex<Option<ApiError>>,
    pub favorites: Mutex<Result<Vec<Offer>, ApiError>>,
    pub session: Mutex<Result<User, ApiError>>,
    pub login: Mutex<Result<User, ApiError>>,
    pub logout: Mutex<Result<(), ApiError>>,
    pub calls: Mutex<Vec<String>>,
    /// Makes `fetch_offers` panic instead of answering.
    pub offers_panic: AtomicBool,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            offers: Mutex::new(Ok(Vec::new())),
            offer: Mutex::new(Err(not_found())),
            nearby: Mutex::new(Ok(Vec::new())),
            reviews: Mutex::new(Ok(Vec::new())),
            post_review_error: Mutex::new(None),
            favorites: Mutex::new(Ok(Vec::new())),
            session: Mutex::new(Err(ApiError::Unauthorized)),
            login: Mutex::new(Ok(fixtures::user())),
            logout: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
            offers_panic: AtomicBool::new(false),
        }
    }
}

impl FakeApi {
    pub fn with_offers(offers: Vec<Offer>) -> Self {
        Self {
            offers: Mutex::new(Ok(offers)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl OffersApi for FakeApi {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.record("GET /offers");
        if self.offers_panic.load(Ordering::SeqCst) {
            panic!("backend handler crashed");
        }
        self.offers.lock().clone()
    }

    async fn fetch_offer(&self, offer_id: &str) -> Result<OfferDetails, ApiError> {
        self.record(format!("GET /offers/{offer_id}"));
        self.offer.lock().clone()
    }

    async fn fetch_nearby(&self, offer_id: &str) -> Result<Vec<Offer>, ApiError> {
        self.record(format!("GET /offers/{offer_id}/nearby"));
        self.nearby.lock().clone()
    }

    async fn fetch_reviews(&self, offer_id: &str) -> Result<Vec<Review>, ApiError> {
        self.record(format!("GET /offers/{offer_id}/reviews"));
        self.reviews.lock().clone()
    }

    async fn post_review(&self, offer_id: &str, review: &NewReview) -> Result<Review, ApiError> {
        self.record(format!("POST /offers/{offer_id}/reviews"));
        if let Some(err) = self.post_review_error.lock().clone() {
            return Err(err);
        }
        let author = UserPreview::from(&fixtures::user());
        Ok(Review {
            id: format!("review-{}", self.calls.lock().len()),
            comment: review.comment.clone(),
            rating: review.rating,
            date: "2030-01-01T00:00:00.000Z".into(),
            user: author,
        })
    }

    async fn fetch_favorites(&self) -> Result<Vec<Offer>, ApiError> {
        self.record("GET /favorites");
        self.favorites.lock().clone()
    }

    async fn set_favorite_status(
        &self,
        offer_id: &str,
        status: FavoriteStatus,
    ) -> Result<Offer, ApiError> {
        self.record(format!(
            "POST /favorites/{offer_id}/{}",
            status.as_path_segment()
        ));
        let offers = self.offers.lock().clone()?;
        let offer = offers
            .into_iter()
            .find(|o| o.id == offer_id)
            .ok_or_else(not_found)?;
        Ok(Offer {
            is_favorite: status == FavoriteStatus::Add,
            ..offer
        })
    }

    async fn check_auth(&self) -> Result<User, ApiError> {
        self.record("GET /login");
        self.session.lock().clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.record(format!("POST /login {}", credentials.email));
        self.login.lock().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("DELETE /logout");
        self.logout.lock().clone()
    }
}
