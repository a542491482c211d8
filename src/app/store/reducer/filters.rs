use std::sync::Arc;

use super::super::super::state::FiltersState;
use super::super::action::{Action, FiltersAction};

pub fn reduce(filters: &mut Arc<FiltersState>, action: &Action) {
    let Action::Filters(action) = action else {
        return;
    };
    let filters = Arc::make_mut(filters);
    match action {
        FiltersAction::ChangeCity(city) => filters.city = city.clone(),
        FiltersAction::ChangeSort(sort) => filters.sort = sort.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::action::{change_city, change_sort};
    use crate::domain::SortKey;

    #[test]
    fn last_city_wins() {
        let mut filters = Arc::new(FiltersState::default());
        reduce(&mut filters, &change_city("Hamburg"));
        reduce(&mut filters, &change_city("Cologne"));
        assert_eq!(filters.city, "Cologne");
    }

    #[test]
    fn city_is_not_validated() {
        let mut filters = Arc::new(FiltersState::default());
        reduce(&mut filters, &change_city("Atlantis"));
        assert_eq!(filters.city, "Atlantis");
    }

    #[test]
    fn missing_sort_resets_to_popular() {
        let mut filters = Arc::new(FiltersState::default());
        reduce(&mut filters, &change_sort(Some(SortKey::TopRatedFirst)));
        assert_eq!(filters.sort, SortKey::TopRatedFirst);

        reduce(&mut filters, &change_sort(None));
        assert_eq!(filters.sort, SortKey::Popular);
    }
}
