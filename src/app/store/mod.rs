//! Reducer-style state updates + async commands.

pub mod action;
pub mod command;
pub mod reducer;
pub mod runtime;

pub use action::{
    Action, AuthAction, FavoritesAction, FiltersAction, OfferDetailsAction, OffersAction, Phase,
    ReviewsAction, change_city, change_sort,
};
pub use command::Command;
pub use runtime::Runtime;

use super::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AppState) + Send + Sync>;

/// Holds the current state tree and the listeners interested in it.
/// Constructed explicitly and owned by whoever drives the UI.
#[derive(Default)]
pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Current state. Clone it for a snapshot; clones share every domain.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        log::trace!("dispatch {:?}", action);
        self.state = reducer::reduce(&self.state, &action);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// Registers a listener called with the new state after every dispatch.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&AppState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dispatch_replaces_state_and_keeps_old_snapshot() {
        let mut store = Store::new();
        let snapshot = store.state().clone();

        store.dispatch(change_city("Brussels"));

        assert_eq!(store.state().filters.city, "Brussels");
        assert_eq!(snapshot.filters.city, "Paris");
    }

    #[test]
    fn listeners_are_notified_until_unsubscribed() {
        let mut store = Store::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let id = store.subscribe(move |state| {
            assert!(!state.filters.city.is_empty());
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(change_city("Hamburg"));
        store.dispatch(change_sort(None));
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(change_city("Paris"));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
