//! Aggregate store behavior across composed slices.

use portal_client::config::Settings;
use portal_client::state::business_plans::{BpStatus, BusinessPlansIntent};
use portal_client::state::cp_reports::CpReportsIntent;
use portal_client::state::projects::ProjectsIntent;
use portal_client::state::replenishment::ReplenishmentIntent;
use portal_client::state::settings::SettingsIntent;
use portal_client::state::{AppState, AppStore};

#[test]
fn dispatch_rewrites_only_the_target_slice() {
    let store = AppStore::default();
    let before = store.snapshot();

    store.dispatch(BusinessPlansIntent::SetSearch("foam".to_string()));

    let after = store.snapshot();
    assert_eq!(after.business_plans.search, "foam");
    assert_eq!(after.cp_reports, before.cp_reports);
    assert_eq!(after.projects, before.projects);
    assert_eq!(after.replenishment, before.replenishment);
    assert_eq!(after.settings, before.settings);
}

#[test]
fn interleaved_dispatches_compose_like_isolated_ones() {
    let interleaved = AppStore::default();
    interleaved.dispatch(BusinessPlansIntent::SetActiveTab(2));
    interleaved.dispatch(CpReportsIntent::SetYear(Some(2025)));
    interleaved.dispatch(ProjectsIntent::SetSearch("solvent".to_string()));
    interleaved.dispatch(BusinessPlansIntent::SetStatuses(vec![BpStatus::Endorsed]));
    interleaved.dispatch(CpReportsIntent::SetCountry(Some(12)));

    let sequential = AppStore::default();
    sequential.dispatch(BusinessPlansIntent::SetActiveTab(2));
    sequential.dispatch(BusinessPlansIntent::SetStatuses(vec![BpStatus::Endorsed]));
    sequential.dispatch(CpReportsIntent::SetYear(Some(2025)));
    sequential.dispatch(CpReportsIntent::SetCountry(Some(12)));
    sequential.dispatch(ProjectsIntent::SetSearch("solvent".to_string()));

    assert_eq!(interleaved.snapshot(), sequential.snapshot());
}

#[test]
fn later_tab_selection_wins() {
    let store = AppStore::default();

    store.dispatch(BusinessPlansIntent::SetActiveTab(3));
    store.dispatch(BusinessPlansIntent::SetActiveTab(5));

    assert_eq!(store.select(|s| s.business_plans.active_tab), 5);
}

#[test]
fn failed_update_leaves_state_and_version_untouched() {
    let store = AppStore::default();
    store.dispatch(ReplenishmentIntent::SetPeriod {
        start_year: 2024,
        end_year: 2026,
    });

    let before = store.snapshot();
    let version = store.version();

    let result = store.try_update(|draft| {
        draft.replenishment.active_tab = 4;
        draft.projects.search = "half written".to_string();
        Err("period overlaps an existing replenishment")
    });

    assert!(result.is_err());
    assert_eq!(store.snapshot(), before);
    assert_eq!(store.version(), version);
}

#[test]
fn successful_update_commits_the_whole_draft() {
    let store = AppStore::default();

    store
        .try_update(|draft| {
            draft.projects.search = "refrigeration".to_string();
            draft.projects.country_id = Some(7);
            Ok::<(), &str>(())
        })
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.projects.search, "refrigeration");
    assert_eq!(state.projects.country_id, Some(7));
}

#[test]
fn noop_dispatch_keeps_the_version() {
    let store = AppStore::default();
    store.dispatch(SettingsIntent::SetHost(Some("portal.test".to_string())));
    let version = store.version();

    store.dispatch(SettingsIntent::SetHost(Some("portal.test".to_string())));

    assert_eq!(store.version(), version);
}

#[test]
fn version_counts_each_state_changing_commit() {
    let store = AppStore::default();
    assert_eq!(store.version(), 0);

    store.dispatch(BusinessPlansIntent::SetActiveTab(1));
    store.dispatch(CpReportsIntent::SetYear(Some(2024)));

    assert_eq!(store.version(), 2);
}

#[test]
fn cloned_handles_observe_the_same_state() {
    let store = AppStore::default();
    let reader = store.clone();

    store.dispatch(ProjectsIntent::SetAgency(Some(3)));

    assert_eq!(reader.select(|s| s.projects.agency_id), Some(3));
    assert_eq!(reader.version(), store.version());
}

#[test]
fn seeded_store_takes_connection_values_from_config() {
    let mut settings = Settings::default();
    settings.api.host = Some("portal.example.org".to_string());
    settings.api.protocol = Some("http".to_string());

    let store = AppStore::seeded(&settings);
    let state = store.snapshot();

    assert_eq!(state.settings.host.as_deref(), Some("portal.example.org"));
    assert_eq!(state.settings.protocol.as_deref(), Some("http"));
    assert_eq!(state.business_plans, AppState::default().business_plans);
}
