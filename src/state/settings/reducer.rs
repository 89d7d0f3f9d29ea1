use super::intent::SettingsIntent;
use super::state::SettingsState;
use crate::store::Reducer;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::SetHost(host) => SettingsState { host, ..state },
            SettingsIntent::SetProtocol(protocol) => SettingsState { protocol, ..state },
        }
    }
}
