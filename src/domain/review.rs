use serde::{Deserialize, Serialize};

use super::user::UserPreview;

/// Unique identifier for a guest review
pub type ReviewId = String;

/// Shortest comment the review form accepts.
pub const MIN_COMMENT_LENGTH: usize = 50;
/// Longest comment the review form accepts.
pub const MAX_COMMENT_LENGTH: usize = 300;

/// A guest review attached to an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub comment: String,
    pub rating: u8,
    /// ISO-8601 timestamp; ordering compares it as a string.
    pub date: String,
    pub user: UserPreview,
}

/// Body of `POST /offers/:id/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub comment: String,
    pub rating: u8,
}

impl NewReview {
    /// Form-level check applied by front ends before submitting.
    /// The store itself accepts any payload.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err(format!("rating must be between 1 and 5, got {}", self.rating));
        }
        let length = self.comment.trim().chars().count();
        if !(MIN_COMMENT_LENGTH..=MAX_COMMENT_LENGTH).contains(&length) {
            return Err(format!(
                "comment must be {MIN_COMMENT_LENGTH}-{MAX_COMMENT_LENGTH} characters, got {length}"
            ));
        }
        Ok(())
    }
}

/// Newest first; equal dates keep their original relative order.
pub fn sort_by_date_desc(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.date.cmp(&a.date));
}
