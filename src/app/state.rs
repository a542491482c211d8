//! Application state tree.
//!
//! Each domain sits behind its own `Arc`. Reducers copy a domain only when an
//! action touches it, so untouched domains stay pointer-equal across states.

use std::sync::Arc;

use crate::domain::{
    AuthorizationStatus, OfferDetails, Review, SharedOffer, SortKey, User, default_city,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub filters: Arc<FiltersState>,
    pub offers: Arc<OffersState>,
    pub offer_details: Arc<OfferDetailsState>,
    pub reviews: Arc<ReviewsState>,
    pub auth: Arc<AuthState>,
    pub favorites: Arc<FavoritesState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FiltersState {
    pub city: String,
    pub sort: SortKey,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self {
            city: default_city(),
            sort: SortKey::Popular,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OffersState {
    pub list: Vec<SharedOffer>,
    pub list_loading: bool,
    pub nearby: Vec<SharedOffer>,
    pub nearby_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfferDetailsState {
    pub current: Option<OfferDetails>,
    pub current_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewsState {
    /// Newest first.
    pub list: Vec<Review>,
    pub list_loading: bool,
    pub post_new_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub status: AuthorizationStatus,
    pub user: Option<User>,
    pub authorization_loading: bool,
    pub login_loading: bool,
    pub logout_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    /// `None` until the favorites list has been fetched.
    pub list: Option<Vec<SharedOffer>>,
    pub list_loading: bool,
    pub set_status_loading: bool,
}
