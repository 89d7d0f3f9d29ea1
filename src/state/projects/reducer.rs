use super::intent::ProjectsIntent;
use super::state::ProjectsState;
use crate::store::Reducer;

pub struct ProjectsReducer;

impl Reducer for ProjectsReducer {
    type State = ProjectsState;
    type Intent = ProjectsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProjectsIntent::SetCountry(country_id) => ProjectsState {
                country_id,
                ..state
            },
            ProjectsIntent::SetAgency(agency_id) => ProjectsState { agency_id, ..state },
            ProjectsIntent::SetSector(sector) => ProjectsState { sector, ..state },
            ProjectsIntent::SetStatus(status) => ProjectsState { status, ..state },
            ProjectsIntent::SetSearch(search) => ProjectsState { search, ..state },
            ProjectsIntent::SetOrdering {
                ordering,
                descending,
            } => ProjectsState {
                ordering,
                descending,
                ..state
            },
            ProjectsIntent::Reset => ProjectsState::default(),
        }
    }
}
