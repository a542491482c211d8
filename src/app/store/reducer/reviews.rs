use std::sync::Arc;

use super::super::super::state::ReviewsState;
use super::super::action::{Action, Phase, ReviewsAction};
use crate::domain::sort_by_date_desc;

pub fn reduce(reviews: &mut Arc<ReviewsState>, action: &Action) {
    let Action::Reviews(action) = action else {
        return;
    };
    let reviews = Arc::make_mut(reviews);
    match action {
        ReviewsAction::FetchList { phase, .. } => match phase {
            Phase::Pending => {
                reviews.list_loading = true;
                reviews.list = Vec::new();
            }
            Phase::Fulfilled(list) => {
                let mut list = list.clone();
                sort_by_date_desc(&mut list);
                reviews.list = list;
                reviews.list_loading = false;
            }
            Phase::Rejected(_) => {
                reviews.list_loading = false;
                reviews.list = Vec::new();
            }
        },
        ReviewsAction::PostNew { phase, .. } => match phase {
            Phase::Pending => reviews.post_new_loading = true,
            // Prepended as-is, not re-sorted. A review already listed is not
            // added twice.
            Phase::Fulfilled(review) => {
                if !reviews.list.iter().any(|r| r.id == review.id) {
                    reviews.list.insert(0, review.clone());
                }
                reviews.post_new_loading = false;
            }
            Phase::Rejected(_) => reviews.post_new_loading = false,
        },
    }
}
