use super::intent::ReplenishmentIntent;
use super::state::ReplenishmentState;
use crate::store::Reducer;

pub struct ReplenishmentReducer;

impl Reducer for ReplenishmentReducer {
    type State = ReplenishmentState;
    type Intent = ReplenishmentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReplenishmentIntent::SetPeriod {
                start_year,
                end_year,
            } => ReplenishmentState {
                period: Some((start_year, end_year)),
                ..state
            },
            ReplenishmentIntent::ClearPeriod => ReplenishmentState {
                period: None,
                ..state
            },
            ReplenishmentIntent::SetActiveTab(tab) => ReplenishmentState {
                active_tab: tab,
                ..state
            },
        }
    }
}
