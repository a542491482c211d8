//! Root app struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::state::AppState;
use super::store::{Action, Command, Runtime, Store};
use crate::domain::ApiError;
use crate::infra::api::OffersApi;
use crate::infra::token::TokenStorage;

const ACTION_CHANNEL_CAPACITY: usize = 64;

/// Owns the store and the runtime that feeds it.
pub struct SixCitiesApp {
    pub store: Store,
    runtime: Runtime,

    pub(super) action_tx: mpsc::Sender<Action>,
    pub(super) action_rx: mpsc::Receiver<Action>,
    pub(super) in_flight: usize,
}

impl SixCitiesApp {
    pub fn new(api: Arc<dyn OffersApi>, tokens: TokenStorage) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        Self {
            store: Store::new(),
            runtime: Runtime::new(api, tokens),
            action_tx,
            action_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn tokens(&self) -> &TokenStorage {
        self.runtime.tokens()
    }

    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    /// Dispatches the pending action now and settles it in the background.
    /// The outcome is picked up by `poll_action_messages` or `wait_for_idle`.
    /// A request whose task dies is settled as rejected with
    /// `ApiError::Internal`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn request(&mut self, command: Command) {
        self.dispatch(command.pending());
        self.in_flight += 1;

        let runtime = self.runtime.clone();
        let action_tx = self.action_tx.clone();
        let fallback = command.clone();
        let task = tokio::spawn(async move { runtime.execute(command).await });
        tokio::spawn(async move {
            let action = match task.await {
                Ok(action) => action,
                Err(err) => {
                    log::error!("{} aborted: {}", fallback.name(), err);
                    fallback.rejected(ApiError::Internal(err.to_string()))
                }
            };
            if action_tx.send(action).await.is_err() {
                log::debug!("app dropped before action was delivered");
            }
        });
    }

    /// Runs one command to completion, dispatching both its pending and its
    /// settled action. Returns the rejection reason, if any.
    pub async fn run(&mut self, command: Command) -> Result<(), ApiError> {
        self.dispatch(command.pending());
        let action = self.runtime.execute(command).await;
        let outcome = action.error().cloned();
        self.dispatch(action);
        match outcome {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for SixCitiesApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SixCitiesApp")
            .field("store", &self.store)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
