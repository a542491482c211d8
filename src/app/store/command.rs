use crate::domain::{ApiError, Credentials, FavoriteStatus, NewReview, OfferId};

use super::action::{
    Action, AuthAction, FavoritesAction, OfferDetailsAction, OffersAction, Phase, ReviewsAction,
};

/// An asynchronous operation: one backend round trip whose three phases are
/// dispatched into the store by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadOffers,
    FetchOffer {
        offer_id: OfferId,
    },
    FetchNearby {
        offer_id: OfferId,
    },
    CheckAuth,
    Login {
        credentials: Credentials,
    },
    Logout,
    FetchReviews {
        offer_id: OfferId,
    },
    PostReview {
        offer_id: OfferId,
        review: NewReview,
    },
    FetchFavorites,
    SetFavoriteStatus {
        offer_id: OfferId,
        status: FavoriteStatus,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadOffers => "offers/fetchList",
            Self::FetchOffer { .. } => "offerDetails/fetchById",
            Self::FetchNearby { .. } => "offers/fetchNearby",
            Self::CheckAuth => "auth/checkAuth",
            Self::Login { .. } => "auth/login",
            Self::Logout => "auth/logout",
            Self::FetchReviews { .. } => "reviews/fetchList",
            Self::PostReview { .. } => "reviews/postNew",
            Self::FetchFavorites => "favorites/fetchList",
            Self::SetFavoriteStatus { .. } => "favorites/setStatus",
        }
    }

    /// Action announcing that this operation has started.
    pub fn pending(&self) -> Action {
        self.with_phase(None)
    }

    /// Action settling this operation with `err` when no outcome was
    /// produced, e.g. because the request task died.
    pub fn rejected(&self, err: ApiError) -> Action {
        self.with_phase(Some(err))
    }

    fn with_phase(&self, err: Option<ApiError>) -> Action {
        fn phase<T>(err: &Option<ApiError>) -> Phase<T> {
            match err {
                Some(err) => Phase::Rejected(err.clone()),
                None => Phase::Pending,
            }
        }

        match self {
            Self::LoadOffers => Action::Offers(OffersAction::FetchList(phase(&err))),
            Self::FetchOffer { offer_id } => Action::OfferDetails(OfferDetailsAction::FetchById {
                offer_id: offer_id.clone(),
                phase: phase(&err),
            }),
            Self::FetchNearby { offer_id } => Action::Offers(OffersAction::FetchNearby {
                offer_id: offer_id.clone(),
                phase: phase(&err),
            }),
            Self::CheckAuth => Action::Auth(AuthAction::CheckAuth(phase(&err))),
            Self::Login { .. } => Action::Auth(AuthAction::Login(phase(&err))),
            Self::Logout => Action::Auth(AuthAction::Logout(phase(&err))),
            Self::FetchReviews { offer_id } => Action::Reviews(ReviewsAction::FetchList {
                offer_id: offer_id.clone(),
                phase: phase(&err),
            }),
            Self::PostReview { offer_id, .. } => Action::Reviews(ReviewsAction::PostNew {
                offer_id: offer_id.clone(),
                phase: phase(&err),
            }),
            Self::FetchFavorites => Action::Favorites(FavoritesAction::FetchList(phase(&err))),
            Self::SetFavoriteStatus { offer_id, status } => {
                Action::Favorites(FavoritesAction::SetStatus {
                    offer_id: offer_id.clone(),
                    status: *status,
                    phase: phase(&err),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_action_keeps_request_arguments() {
        let command = Command::SetFavoriteStatus {
            offer_id: "7".into(),
            status: FavoriteStatus::Add,
        };
        assert_eq!(
            command.pending(),
            Action::Favorites(FavoritesAction::SetStatus {
                offer_id: "7".into(),
                status: FavoriteStatus::Add,
                phase: Phase::Pending,
            })
        );
        assert_eq!(command.name(), "favorites/setStatus");
    }

    #[test]
    fn rejected_action_mirrors_pending_shape() {
        let err = ApiError::Internal("task panicked".into());
        let commands = [
            Command::LoadOffers,
            Command::FetchOffer {
                offer_id: "1".into(),
            },
            Command::FetchNearby {
                offer_id: "1".into(),
            },
            Command::CheckAuth,
            Command::Logout,
            Command::FetchReviews {
                offer_id: "1".into(),
            },
            Command::FetchFavorites,
            Command::SetFavoriteStatus {
                offer_id: "1".into(),
                status: FavoriteStatus::Remove,
            },
        ];
        for command in commands {
            let rejected = command.rejected(err.clone());
            assert_eq!(rejected.error(), Some(&err), "{}", command.name());
            assert_eq!(
                std::mem::discriminant(&rejected),
                std::mem::discriminant(&command.pending())
            );
        }
        assert_eq!(
            Command::LoadOffers.rejected(err.clone()),
            Action::Offers(OffersAction::FetchList(Phase::Rejected(err)))
        );
    }

    #[test]
    fn login_debug_output_hides_password() {
        let command = Command::Login {
            credentials: Credentials {
                email: "a@b.c".into(),
                password: "hunter22".into(),
            },
        };
        assert!(!format!("{command:?}").contains("hunter22"));
    }
}
