//! Client state for a rental listing app: offers per city, offer pages with
//! reviews and nearby places, favorites, and the user session.

pub mod app;
pub mod domain;
pub mod infra;

pub use app::{AppState, Command, SixCitiesApp, Store};
