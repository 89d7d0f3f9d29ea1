//! Application state tree.
//!
//! Each feature owns a slice (state + intent + reducer); this module stitches
//! them into the aggregate [`AppState`] handled by a single [`AppStore`].
//! Dispatching a slice intent rewrites that slice only.

pub mod business_plans;
pub mod cp_reports;
pub mod projects;
pub mod replenishment;
pub mod settings;

use crate::config::Settings;
use crate::store::{Intent, Reducer, SliceState, Store};

use business_plans::{BusinessPlansIntent, BusinessPlansReducer, BusinessPlansState};
use cp_reports::{CpReportsIntent, CpReportsReducer, CpReportsState};
use projects::{ProjectsIntent, ProjectsReducer, ProjectsState};
use replenishment::{ReplenishmentIntent, ReplenishmentReducer, ReplenishmentState};
use settings::{SettingsIntent, SettingsReducer, SettingsState};

/// Aggregate of every registered slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub business_plans: BusinessPlansState,
    pub cp_reports: CpReportsState,
    pub projects: ProjectsState,
    pub replenishment: ReplenishmentState,
    pub settings: SettingsState,
}

impl AppState {
    /// Initial state with the settings slice populated from configuration.
    pub fn seeded(settings: &Settings) -> Self {
        AppState {
            settings: SettingsState::seeded(None, settings),
            ..Default::default()
        }
    }
}

impl SliceState for AppState {}

/// Union of the slice intents. Slice intents convert via `From`, so callers
/// dispatch them directly without naming the wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    BusinessPlans(BusinessPlansIntent),
    CpReports(CpReportsIntent),
    Projects(ProjectsIntent),
    Replenishment(ReplenishmentIntent),
    Settings(SettingsIntent),
}

impl Intent for AppIntent {}

impl From<BusinessPlansIntent> for AppIntent {
    fn from(intent: BusinessPlansIntent) -> Self {
        AppIntent::BusinessPlans(intent)
    }
}

impl From<CpReportsIntent> for AppIntent {
    fn from(intent: CpReportsIntent) -> Self {
        AppIntent::CpReports(intent)
    }
}

impl From<ProjectsIntent> for AppIntent {
    fn from(intent: ProjectsIntent) -> Self {
        AppIntent::Projects(intent)
    }
}

impl From<ReplenishmentIntent> for AppIntent {
    fn from(intent: ReplenishmentIntent) -> Self {
        AppIntent::Replenishment(intent)
    }
}

impl From<SettingsIntent> for AppIntent {
    fn from(intent: SettingsIntent) -> Self {
        AppIntent::Settings(intent)
    }
}

/// Routes each intent to the reducer of the slice it belongs to.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::BusinessPlans(intent) => {
                state.business_plans = BusinessPlansReducer::reduce(state.business_plans, intent);
                state
            }
            AppIntent::CpReports(intent) => {
                state.cp_reports = CpReportsReducer::reduce(state.cp_reports, intent);
                state
            }
            AppIntent::Projects(intent) => {
                state.projects = ProjectsReducer::reduce(state.projects, intent);
                state
            }
            AppIntent::Replenishment(intent) => {
                state.replenishment = ReplenishmentReducer::reduce(state.replenishment, intent);
                state
            }
            AppIntent::Settings(intent) => {
                state.settings = SettingsReducer::reduce(state.settings, intent);
                state
            }
        }
    }
}

/// Store specialised to the application state tree.
pub type AppStore = Store<AppReducer>;

impl AppStore {
    /// Store whose settings slice starts from the loaded configuration.
    pub fn seeded(settings: &Settings) -> Self {
        Store::new(AppState::seeded(settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_plans_intent_leaves_other_slices_untouched() {
        let store = AppStore::default();
        let before = store.snapshot();

        store.dispatch(BusinessPlansIntent::SetActiveTab(3));

        let after = store.snapshot();
        assert_eq!(after.business_plans.active_tab, 3);
        assert_eq!(after.cp_reports, before.cp_reports);
        assert_eq!(after.projects, before.projects);
        assert_eq!(after.replenishment, before.replenishment);
        assert_eq!(after.settings, before.settings);
    }

    #[test]
    fn later_dispatch_wins() {
        let store = AppStore::default();

        store.dispatch(BusinessPlansIntent::SetActiveTab(3));
        store.dispatch(BusinessPlansIntent::SetActiveTab(5));

        assert_eq!(store.select(|s| s.business_plans.active_tab), 5);
    }

    #[test]
    fn seeded_store_reflects_config() {
        let mut settings = Settings::default();
        settings.api.host = Some("portal.example.org".to_string());

        let store = AppStore::seeded(&settings);

        assert_eq!(
            store.select(|s| s.settings.host.clone()).as_deref(),
            Some("portal.example.org")
        );
    }
}
