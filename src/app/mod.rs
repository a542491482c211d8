//! Client-side application state for the rental listing app.
//!
//! The state tree lives in a [`Store`] owned by [`SixCitiesApp`]. Async work
//! goes through [`Runtime`]; its results come back over a channel and are
//! dispatched on the owning side, so the state only ever has one writer.

mod polling;
mod root;
pub mod selectors;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod tests;

pub use root::SixCitiesApp;
pub use state::{
    AppState, AuthState, FavoritesState, FiltersState, OfferDetailsState, OffersState,
    ReviewsState,
};
pub use store::{
    Action, AuthAction, Command, FavoritesAction, FiltersAction, OfferDetailsAction,
    OffersAction, Phase, ReviewsAction, Runtime, Store, SubscriptionId, change_city, change_sort,
};
