use crate::config::Settings;
use crate::store::SliceState;

/// Connection details surfaced to the user, kept separate from the loaded
/// configuration so edits can be staged without touching the config file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub host: Option<String>,
    pub protocol: Option<String>,
}

impl SettingsState {
    /// Builds the initial slice. An explicit snapshot wins over configured
    /// values, which win over empty fields.
    pub fn seeded(initial: Option<Self>, settings: &Settings) -> Self {
        match initial {
            Some(state) => state,
            None => SettingsState {
                host: settings.api.host.clone(),
                protocol: settings.api.protocol.clone(),
            },
        }
    }
}

impl SliceState for SettingsState {}
