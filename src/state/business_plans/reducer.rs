use crate::store::Reducer;

use super::intent::BusinessPlansIntent;
use super::state::BusinessPlansState;

pub struct BusinessPlansReducer;

impl Reducer for BusinessPlansReducer {
    type State = BusinessPlansState;
    type Intent = BusinessPlansIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BusinessPlansIntent::SetActiveTab(active_tab) => BusinessPlansState {
                active_tab,
                ..state
            },
            BusinessPlansIntent::SetPeriod {
                start_year,
                end_year,
            } => BusinessPlansState {
                start_year,
                end_year,
                ..state
            },
            BusinessPlansIntent::SetAgencies(agency_ids) => BusinessPlansState {
                agency_ids,
                ..state
            },
            BusinessPlansIntent::SetStatuses(statuses) => BusinessPlansState {
                statuses,
                ..state
            },
            BusinessPlansIntent::SetSearch(search) => BusinessPlansState { search, ..state },
            BusinessPlansIntent::ClearFilters => BusinessPlansState {
                active_tab: state.active_tab,
                ..BusinessPlansState::default()
            },
        }
    }
}
