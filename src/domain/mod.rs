//! Domain types for the Six Cities client.
//! Offers, reviews, users and the errors that requests can fail with.

pub mod error;
pub mod offer;
pub mod review;
pub mod sort;
pub mod user;

pub use error::*;
pub use offer::*;
pub use review::*;
pub use sort::*;
pub use user::*;
