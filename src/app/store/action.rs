use crate::domain::{
    ApiError, FavoriteStatus, OfferDetails, OfferId, Review, SharedOffer, SortKey, User,
};

/// Lifecycle of one asynchronous request.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Pending,
    Fulfilled(T),
    Rejected(ApiError),
}

impl<T> Phase<T> {
    pub fn settle(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Fulfilled(value),
            Err(err) => Self::Rejected(err),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Filters(FiltersAction),
    Offers(OffersAction),
    OfferDetails(OfferDetailsAction),
    Reviews(ReviewsAction),
    Auth(AuthAction),
    Favorites(FavoritesAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FiltersAction {
    ChangeCity(String),
    /// `None` falls back to the default ordering.
    ChangeSort(Option<SortKey>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OffersAction {
    FetchList(Phase<Vec<SharedOffer>>),
    FetchNearby {
        offer_id: OfferId,
        phase: Phase<Vec<SharedOffer>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OfferDetailsAction {
    FetchById {
        offer_id: OfferId,
        phase: Phase<OfferDetails>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsAction {
    FetchList {
        offer_id: OfferId,
        phase: Phase<Vec<Review>>,
    },
    PostNew {
        offer_id: OfferId,
        phase: Phase<Review>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    CheckAuth(Phase<User>),
    Login(Phase<User>),
    Logout(Phase<()>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesAction {
    FetchList(Phase<Vec<SharedOffer>>),
    SetStatus {
        offer_id: OfferId,
        status: FavoriteStatus,
        phase: Phase<SharedOffer>,
    },
}

pub fn change_city(city: impl Into<String>) -> Action {
    Action::Filters(FiltersAction::ChangeCity(city.into()))
}

pub fn change_sort(sort: Option<SortKey>) -> Action {
    Action::Filters(FiltersAction::ChangeSort(sort))
}

impl Action {
    /// Error carried by a rejected phase, if this action is one.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Action::Filters(_) => None,
            Action::Offers(OffersAction::FetchList(phase)) => phase.error(),
            Action::Offers(OffersAction::FetchNearby { phase, .. }) => phase.error(),
            Action::OfferDetails(OfferDetailsAction::FetchById { phase, .. }) => phase.error(),
            Action::Reviews(ReviewsAction::FetchList { phase, .. }) => phase.error(),
            Action::Reviews(ReviewsAction::PostNew { phase, .. }) => phase.error(),
            Action::Auth(AuthAction::CheckAuth(phase)) => phase.error(),
            Action::Auth(AuthAction::Login(phase)) => phase.error(),
            Action::Auth(AuthAction::Logout(phase)) => phase.error(),
            Action::Favorites(FavoritesAction::FetchList(phase)) => phase.error(),
            Action::Favorites(FavoritesAction::SetStatus { phase, .. }) => phase.error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_city_carries_payload() {
        assert_eq!(
            change_city("Amsterdam"),
            Action::Filters(FiltersAction::ChangeCity("Amsterdam".into()))
        );
    }

    #[test]
    fn change_sort_accepts_every_key_and_none() {
        for key in SortKey::ALL {
            assert_eq!(
                change_sort(Some(key)),
                Action::Filters(FiltersAction::ChangeSort(Some(key)))
            );
        }
        assert_eq!(
            change_sort(None),
            Action::Filters(FiltersAction::ChangeSort(None))
        );
    }

    #[test]
    fn error_is_only_reported_for_rejected_phases() {
        let rejected = Action::Auth(AuthAction::Logout(Phase::Rejected(ApiError::Unauthorized)));
        assert_eq!(rejected.error(), Some(&ApiError::Unauthorized));

        let fulfilled = Action::Auth(AuthAction::Logout(Phase::Fulfilled(())));
        assert!(fulfilled.error().is_none());
        assert!(change_city("Paris").error().is_none());
    }

    #[test]
    fn settle_maps_results_to_phases() {
        assert_eq!(Phase::settle(Ok::<_, ApiError>(3)), Phase::Fulfilled(3));
        assert_eq!(
            Phase::<u8>::settle(Err(ApiError::Server { status: 500 })),
            Phase::Rejected(ApiError::Server { status: 500 })
        );
        assert!(Phase::<u8>::Pending.is_pending());
    }
}
