use crate::store::Reducer;

use super::intent::CpReportsIntent;
use super::state::CpReportsState;

pub struct CpReportsReducer;

impl Reducer for CpReportsReducer {
    type State = CpReportsState;
    type Intent = CpReportsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CpReportsIntent::SetCountry(country_id) => CpReportsState {
                country_id,
                ..state
            },
            CpReportsIntent::SetYear(year) => CpReportsState { year, ..state },
            CpReportsIntent::Reset => CpReportsState::default(),
        }
    }
}
